// The task sheet layout is hardcoded to keep the range plumbing simple.

pub mod tasks {
    /// Full two-column range: column A is unused, column B holds titles.
    /// The first row is the header.
    pub const RO_ALL: &str = "Sheet1!A:B";

    /// Anchor for appends; the API places new rows after the last populated
    /// row of the table starting at this cell.
    pub const RW_APPEND: &str = "Sheet1!A1";
}
