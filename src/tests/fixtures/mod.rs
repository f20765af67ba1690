pub mod commands {
    pub mod punch_attempt;
}
pub mod entries;
pub mod policy;
pub mod records;
