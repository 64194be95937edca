//! Main module for XProtocol library functionality

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod reader;
pub mod testing;
pub mod text;
