//! Domain Services - Logic that spans more than one alien

pub mod colony;
