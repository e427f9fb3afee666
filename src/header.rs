use std::fmt::Write;

/// Include guard wrapped around the generated declaration.
pub const GUARD: &str = "_VERSION_HPP_";

/// Renders the complete header text.
///
/// The output ends with `"#endif\n\n\r"`: a blank line followed by a line
/// holding a lone carriage return.
pub fn render(generator: &str, descriptor: &str) -> String {
    let mut out = String::with_capacity(256);

    // Writing into a String cannot fail
    let _ = write!(
        out,
        "/*\n    This file has been autogenerated using [{generator}].\n    This file may be overwritten.\n*/\n"
    );
    let _ = write!(out, "#ifndef {GUARD}\n#define {GUARD}\n\n");
    let _ = writeln!(
        out,
        "static const char* VERSION = \"{}\";",
        escape_c_string(descriptor)
    );
    out.push_str("\n#endif\n\n\r");

    out
}

// Only the two characters that can break out of a string literal are escaped.
fn escape_c_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            c => escaped.push(c),
        }
    }
    escaped
}
