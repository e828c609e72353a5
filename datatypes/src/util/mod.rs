mod identifiers;

pub use identifiers::Identifier;
