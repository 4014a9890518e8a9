pub mod advise;
pub mod reference;
pub mod rules;
pub mod weather;
