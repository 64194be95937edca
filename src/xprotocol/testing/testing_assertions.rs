//! Fluent assertion API for parsed protocols

use std::fmt::Debug;

use super::testing_matchers::TextMatch;
use crate::xprotocol::ast::{
    AstNode, AttrValue, CardLayout, CardStyle, Container, Dependency, Functor, Param, ParamArray,
    ParamBlock, ParamChoice, PipeService, Protocol, Scalar, ScalarList, WiringKind,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a protocol
pub fn assert_protocol(protocol: &Protocol) -> ProtocolAssertion<'_> {
    ProtocolAssertion { protocol }
}

fn summarize_blocks(blocks: &[ParamBlock]) -> String {
    blocks
        .iter()
        .map(|block| format!("{}({})", block.node_type(), block.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn block_at<'a>(blocks: &'a [ParamBlock], index: usize, context: &str) -> &'a ParamBlock {
    assert!(
        index < blocks.len(),
        "{}: Block index {} out of bounds ({} blocks: [{}])",
        context,
        index,
        blocks.len(),
        summarize_blocks(blocks)
    );
    &blocks[index]
}

fn assert_block_count(blocks: &[ParamBlock], expected: usize, context: &str) {
    assert_eq!(
        blocks.len(),
        expected,
        "{}: Expected {} blocks, found {} blocks: [{}]",
        context,
        expected,
        blocks.len(),
        summarize_blocks(blocks)
    );
}

// ============================================================================
// Protocol Assertions
// ============================================================================

pub struct ProtocolAssertion<'a> {
    protocol: &'a Protocol,
}

impl<'a> ProtocolAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.protocol.name(),
            Some(expected),
            "Expected protocol name '{}'",
            expected
        );
        self
    }

    pub fn id(self, expected: i64) -> Self {
        assert_eq!(self.protocol.header.id, Some(expected), "Expected protocol id");
        self
    }

    pub fn user_version(self, expected: f64) -> Self {
        assert_eq!(
            self.protocol.header.user_version,
            Some(expected),
            "Expected protocol user version"
        );
        self
    }

    /// Assert the EVA string table maps `code` to `label`
    pub fn eva_label(self, code: i64, label: &str) -> Self {
        let table = self
            .protocol
            .header
            .eva_string_table
            .as_ref()
            .unwrap_or_else(|| panic!("Expected an EVA string table"));
        assert_eq!(table.label(code), Some(label), "EVA string {}", code);
        self
    }

    pub fn block_count(self, expected: usize) -> Self {
        assert_block_count(&self.protocol.blocks, expected, "protocol");
        self
    }

    /// Assert on a top-level block by index
    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let block = block_at(&self.protocol.blocks, index, "protocol");
        assertion(BlockAssertion {
            block,
            context: format!("blocks[{}]", index),
        });
        self
    }

    /// Assert on a block found anywhere in the tree by name
    pub fn block_named<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let block = self
            .protocol
            .find_block(name)
            .unwrap_or_else(|| panic!("Expected a block named '{}'", name));
        assertion(BlockAssertion {
            block,
            context: format!("block '{}'", name),
        });
        self
    }

    pub fn card_count(self, expected: usize) -> Self {
        assert_eq!(
            self.protocol.cards.len(),
            expected,
            "Expected {} card layouts",
            expected
        );
        self
    }

    pub fn card<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(CardAssertion<'a>),
    {
        let cards = &self.protocol.cards;
        assert!(
            index < cards.len(),
            "Card index {} out of bounds (protocol has {} cards)",
            index,
            cards.len()
        );
        assertion(CardAssertion {
            card: &cards[index],
            context: format!("cards[{}]", index),
        });
        self
    }

    pub fn dependency_count(self, expected: usize) -> Self {
        assert_eq!(
            self.protocol.dependencies.len(),
            expected,
            "Expected {} dependencies",
            expected
        );
        self
    }

    pub fn dependency<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(DependencyAssertion<'a>),
    {
        let dependencies = &self.protocol.dependencies;
        assert!(
            index < dependencies.len(),
            "Dependency index {} out of bounds (protocol has {} dependencies)",
            index,
            dependencies.len()
        );
        assertion(DependencyAssertion {
            dependency: &dependencies[index],
            context: format!("dependencies[{}]", index),
        });
        self
    }
}

// ============================================================================
// Block Assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a ParamBlock,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        TextMatch::Exact(expected).assert(self.block.name(), &self.context, "name");
        self
    }

    pub fn node_type(self, expected: &str) -> Self {
        assert_eq!(
            self.block.node_type(),
            expected,
            "{}: Unexpected block kind",
            self.context
        );
        self
    }

    pub fn attr_count(self, expected: usize) -> Self {
        let actual = self.block.attrs().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} attributes, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the attribute keys, in source order
    pub fn attr_names(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .block
            .attrs()
            .iter()
            .map(|attribute| attribute.name.as_str())
            .collect();
        assert_eq!(actual, expected, "{}: Unexpected attribute keys", self.context);
        self
    }

    fn attr_value(&self, name: &str) -> &'a AttrValue {
        self.block
            .attrs()
            .get(name)
            .unwrap_or_else(|| panic!("{}: Expected attribute <{}>", self.context, name))
    }

    pub fn attr_scalar(self, name: &str, expected: Scalar) -> Self {
        match self.attr_value(name) {
            AttrValue::Scalar(actual) => assert_eq!(
                actual, &expected,
                "{}: attribute <{}>",
                self.context, name
            ),
            other => panic!(
                "{}: Expected scalar attribute <{}>, found {:?}",
                self.context, name, other
            ),
        }
        self
    }

    pub fn attr_str(self, name: &str, expected: &str) -> Self {
        self.attr_scalar(name, Scalar::String(expected.to_string()))
    }

    pub fn attr_list(self, name: &str, expected: ScalarList) -> Self {
        match self.attr_value(name) {
            AttrValue::List(actual) => assert_eq!(
                actual, &expected,
                "{}: attribute <{}>",
                self.context, name
            ),
            other => panic!(
                "{}: Expected list attribute <{}>, found {:?}",
                self.context, name, other
            ),
        }
        self
    }

    /// Assert on a block-valued attribute such as `<Default> <ParamLong."">{ }`
    pub fn attr_block<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        match self.attr_value(name) {
            AttrValue::Block(block) => assertion(BlockAssertion {
                block: block.as_ref(),
                context: format!("{}:<{}>", self.context, name),
            }),
            other => panic!(
                "{}: Expected block attribute <{}>, found {:?}",
                self.context, name, other
            ),
        }
        self
    }

    fn wrong_kind(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.block.node_type()
        )
    }

    pub fn assert_bool(self) -> ValueAssertion<'a, bool> {
        match self.block {
            ParamBlock::Bool(param) => ValueAssertion::new(param, self.context),
            _ => self.wrong_kind("ParamBool"),
        }
    }

    pub fn assert_long(self) -> ValueAssertion<'a, i64> {
        match self.block {
            ParamBlock::Long(param) => ValueAssertion::new(param, self.context),
            _ => self.wrong_kind("ParamLong"),
        }
    }

    pub fn assert_double(self) -> ValueAssertion<'a, f64> {
        match self.block {
            ParamBlock::Double(param) => ValueAssertion::new(param, self.context),
            _ => self.wrong_kind("ParamDouble"),
        }
    }

    pub fn assert_string(self) -> ValueAssertion<'a, String> {
        match self.block {
            ParamBlock::String(param) => ValueAssertion::new(param, self.context),
            _ => self.wrong_kind("ParamString"),
        }
    }

    pub fn assert_array(self) -> ArrayAssertion<'a> {
        match self.block {
            ParamBlock::Array(array) => ArrayAssertion {
                array,
                context: self.context,
            },
            _ => self.wrong_kind("ParamArray"),
        }
    }

    pub fn assert_choice(self) -> ChoiceAssertion<'a> {
        match self.block {
            ParamBlock::Choice(choice) => ChoiceAssertion {
                choice,
                context: self.context,
            },
            _ => self.wrong_kind("ParamChoice"),
        }
    }

    /// Assert this block is a map and return container assertions over its blocks
    pub fn assert_map(self) -> ContainerAssertion<'a> {
        match self.block {
            ParamBlock::Map(map) => ContainerAssertion::new(map, self.context),
            _ => self.wrong_kind("ParamMap"),
        }
    }

    pub fn assert_functor(self) -> FunctorAssertion<'a> {
        match self.block {
            ParamBlock::Functor(functor) => FunctorAssertion {
                functor,
                context: self.context,
            },
            _ => self.wrong_kind("ParamFunctor"),
        }
    }

    pub fn assert_pipe_service(self) -> PipeServiceAssertion<'a> {
        match self.block {
            ParamBlock::PipeService(service) => PipeServiceAssertion {
                service,
                context: self.context,
            },
            _ => self.wrong_kind("PipeService"),
        }
    }

    pub fn assert_card(self) -> CardAssertion<'a> {
        match self.block {
            ParamBlock::CardLayout(card) => CardAssertion {
                card,
                context: self.context,
            },
            _ => self.wrong_kind("card layout"),
        }
    }
}

// ============================================================================
// Value Assertions
// ============================================================================

pub struct ValueAssertion<'a, T> {
    param: &'a Param<T>,
    context: String,
}

impl<'a, T: PartialEq + Debug> ValueAssertion<'a, T> {
    fn new(param: &'a Param<T>, context: String) -> Self {
        Self { param, context }
    }

    pub fn value(self, expected: T) -> Self {
        assert_eq!(
            self.param.value.as_ref(),
            Some(&expected),
            "{}: Unexpected value",
            self.context
        );
        self
    }

    /// Assert the block holds no value at all
    pub fn absent(self) -> Self {
        assert!(
            self.param.is_absent(),
            "{}: Expected no value, found {:?}",
            self.context,
            self.param.value
        );
        self
    }
}

impl<'a> ValueAssertion<'a, String> {
    fn text_value(&self) -> &'a str {
        self.param
            .value
            .as_deref()
            .unwrap_or_else(|| panic!("{}: Expected a string value", self.context))
    }

    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected).assert(self.text_value(), &self.context, "value");
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix).assert(self.text_value(), &self.context, "value");
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring).assert(self.text_value(), &self.context, "value");
        self
    }

    /// Match a substring of the value with doubled quotes resolved
    pub fn text_unescaped_contains(self, substring: &str) -> Self {
        TextMatch::Unescaped(substring).assert(self.text_value(), &self.context, "value");
        self
    }
}

// ============================================================================
// Array Assertions
// ============================================================================

pub struct ArrayAssertion<'a> {
    array: &'a ParamArray,
    context: String,
}

impl<'a> ArrayAssertion<'a> {
    pub fn section_count(self, expected: usize) -> Self {
        assert_eq!(
            self.array.sections.len(),
            expected,
            "{}: Expected {} value sections",
            self.context,
            expected
        );
        self
    }

    fn section_at(&self, index: usize) -> &'a Option<ScalarList> {
        self.array.sections.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Section index {} out of bounds ({} sections)",
                self.context,
                index,
                self.array.sections.len()
            )
        })
    }

    pub fn section(self, index: usize, expected: ScalarList) -> Self {
        assert_eq!(
            self.section_at(index),
            &Some(expected),
            "{}: sections[{}]",
            self.context,
            index
        );
        self
    }

    /// Assert the section at `index` was written as `{ }`
    pub fn empty_section(self, index: usize) -> Self {
        assert_eq!(
            self.section_at(index),
            &None,
            "{}: Expected sections[{}] to be empty",
            self.context,
            index
        );
        self
    }
}

// ============================================================================
// Choice Assertions
// ============================================================================

pub struct ChoiceAssertion<'a> {
    choice: &'a ParamChoice,
    context: String,
}

impl<'a> ChoiceAssertion<'a> {
    pub fn value(self, expected: &str) -> Self {
        assert_eq!(
            self.choice.value.as_deref(),
            Some(expected),
            "{}: Unexpected selection",
            self.context
        );
        self
    }

    pub fn absent(self) -> Self {
        assert!(
            self.choice.value.is_none(),
            "{}: Expected no selection, found {:?}",
            self.context,
            self.choice.value
        );
        self
    }

    /// Assert the `<Limit>` options
    pub fn options(self, expected: &[&str]) -> Self {
        let expected = ScalarList::String(expected.iter().map(|s| s.to_string()).collect());
        assert_eq!(
            self.choice.attrs.get("Limit"),
            Some(&AttrValue::List(expected)),
            "{}: Unexpected <Limit> options",
            self.context
        );
        self
    }
}

// ============================================================================
// Container Assertions
// ============================================================================

pub struct ContainerAssertion<'a> {
    container: &'a dyn Container,
    blocks: &'a [ParamBlock],
    context: String,
}

impl<'a> ContainerAssertion<'a> {
    fn new(container: &'a dyn Container, context: String) -> Self {
        Self {
            container,
            blocks: container.blocks(),
            context,
        }
    }

    pub fn label(self, expected: &str) -> Self {
        TextMatch::Exact(expected).assert(self.container.label(), &self.context, "label");
        self
    }

    pub fn block_count(self, expected: usize) -> Self {
        assert_block_count(self.blocks, expected, &self.context);
        self
    }

    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let block = block_at(self.blocks, index, &self.context);
        assertion(BlockAssertion {
            block,
            context: format!("{}:blocks[{}]", self.context, index),
        });
        self
    }

    /// Assert the names of the nested blocks, in order
    pub fn block_names(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.blocks.iter().map(ParamBlock::name).collect();
        assert_eq!(actual, expected, "{}: Unexpected block names", self.context);
        self
    }
}

// ============================================================================
// Functor and Pipe Service Assertions
// ============================================================================

pub struct FunctorAssertion<'a> {
    functor: &'a Functor,
    context: String,
}

impl<'a> FunctorAssertion<'a> {
    pub fn class(self, expected: &str) -> Self {
        TextMatch::Exact(expected).assert(&self.functor.class, &self.context, "class");
        self
    }

    pub fn class_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring).assert(&self.functor.class, &self.context, "class");
        self
    }

    pub fn block_count(self, expected: usize) -> Self {
        assert_block_count(Container::blocks(self.functor), expected, &self.context);
        self
    }

    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let block = block_at(Container::blocks(self.functor), index, &self.context);
        assertion(BlockAssertion {
            block,
            context: format!("{}:blocks[{}]", self.context, index),
        });
        self
    }

    fn check_wiring(&self, kind: WiringKind, name: &str, arg_count: usize) {
        let wiring = self.functor.wiring(kind);
        assert_eq!(wiring.name, name, "{}: {} name", self.context, kind.as_str());
        assert_eq!(
            wiring.args.len(),
            arg_count,
            "{}: {} '{}' argument count",
            self.context,
            kind.as_str(),
            name
        );
    }

    pub fn event(self, name: &str, arg_count: usize) -> Self {
        self.check_wiring(WiringKind::Event, name, arg_count);
        self
    }

    pub fn method(self, name: &str, arg_count: usize) -> Self {
        self.check_wiring(WiringKind::Method, name, arg_count);
        self
    }

    /// Assert the connection name and its verbatim arguments
    pub fn connection(self, name: &str, args: &[&str]) -> Self {
        self.check_wiring(WiringKind::Connection, name, args.len());
        assert_eq!(
            self.functor.connection.args, args,
            "{}: Connection arguments",
            self.context
        );
        self
    }
}

pub struct PipeServiceAssertion<'a> {
    service: &'a PipeService,
    context: String,
}

impl<'a> PipeServiceAssertion<'a> {
    pub fn class(self, expected: &str) -> Self {
        TextMatch::Exact(expected).assert(&self.service.class, &self.context, "class");
        self
    }

    pub fn block_count(self, expected: usize) -> Self {
        assert_block_count(Container::blocks(self.service), expected, &self.context);
        self
    }

    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let block = block_at(Container::blocks(self.service), index, &self.context);
        assertion(BlockAssertion {
            block,
            context: format!("{}:blocks[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Card Layout Assertions
// ============================================================================

pub struct CardAssertion<'a> {
    card: &'a CardLayout,
    context: String,
}

impl<'a> CardAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        TextMatch::Exact(expected).assert(&self.card.name, &self.context, "card name");
        self
    }

    pub fn style(self, expected: CardStyle) -> Self {
        assert_eq!(self.card.style, expected, "{}: card style", self.context);
        self
    }

    pub fn repr(self, expected: &str) -> Self {
        TextMatch::Exact(expected).assert(&self.card.repr, &self.context, "repr");
        self
    }

    pub fn declared_controls(self, expected: Option<i64>) -> Self {
        assert_eq!(
            self.card.declared_controls, expected,
            "{}: declared control count",
            self.context
        );
        self
    }

    pub fn control_count(self, expected: usize) -> Self {
        assert_eq!(
            self.card.controls.len(),
            expected,
            "{}: Expected {} controls",
            self.context,
            expected
        );
        self
    }

    pub fn control(self, index: usize, param: &str, pos: (i64, i64), repr: Option<&str>) -> Self {
        let control = self.card.controls.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Control index {} out of bounds ({} controls)",
                self.context,
                index,
                self.card.controls.len()
            )
        });
        let context = format!("{}:controls[{}]", self.context, index);
        TextMatch::Exact(param).assert(&control.param, &context, "param");
        assert_eq!((control.pos.x, control.pos.y), pos, "{}: position", context);
        assert_eq!(control.repr.as_deref(), repr, "{}: repr", context);
        self
    }

    pub fn line_count(self, expected: usize) -> Self {
        assert_eq!(
            self.card.lines.len(),
            expected,
            "{}: Expected {} lines",
            self.context,
            expected
        );
        self
    }

    pub fn line(self, index: usize, expected: [i64; 4]) -> Self {
        assert_eq!(
            self.card.lines.get(index).map(|line| line.0),
            Some(expected),
            "{}: lines[{}]",
            self.context,
            index
        );
        self
    }
}

// ============================================================================
// Dependency Assertions
// ============================================================================

pub struct DependencyAssertion<'a> {
    dependency: &'a Dependency,
    context: String,
}

impl<'a> DependencyAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        TextMatch::Exact(expected).assert(&self.dependency.name, &self.context, "dependency name");
        self
    }

    pub fn targets(self, expected: &[&str]) -> Self {
        assert_eq!(self.dependency.targets, expected, "{}: targets", self.context);
        self
    }

    pub fn dll(self, expected: Option<&str>) -> Self {
        assert_eq!(self.dependency.dll.as_deref(), expected, "{}: <Dll>", self.context);
        self
    }

    pub fn context(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.dependency.context.as_deref(),
            expected,
            "{}: <Context>",
            self.context
        );
        self
    }
}
