//! Candidate fonts offered by the "choose font" command.

/// Font families presented by the font picker, in display order.
///
/// The list favours families with wide symbol and emoji coverage first,
/// followed by common system text faces.
pub const FONT_CANDIDATES: &[&str] = &[
    "Arial Unicode MS",
    "Segoe UI Symbol",
    "Segoe UI Emoji",
    "Apple Color Emoji",
    "Noto Color Emoji",
    "SF Pro Display",
    "Helvetica Neue",
    "Arial",
    "Times New Roman",
    "Courier New",
];
