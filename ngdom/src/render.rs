//! HTML serialization of an element tree.
//!
//! Attributes are written in key order, followed by `ng-model` when the
//! element is bound. Output is deterministic for equal trees.

use std::fmt::{self, Write};
use std::io;

use crate::element::{Content, Element};
use crate::error::Result;

/// Render an element tree to an HTML string.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = render_element(root, &mut out);
    out
}

/// Write an element tree as HTML into `writer`.
pub fn write_html(root: &Element, mut writer: impl io::Write) -> Result<()> {
    let html = to_html(root);
    log::debug!("[render] <{}> {} bytes", root.tag(), html.len());
    writer.write_all(html.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn render_element(element: &Element, out: &mut impl Write) -> fmt::Result {
    write!(out, "<{}", element.tag())?;

    for (key, value) in element.attributes() {
        write!(out, " {key}=\"")?;
        escape_into(&value.to_string(), out)?;
        out.write_char('"')?;
    }

    if let Some(binding) = element.binding() {
        out.write_str(" ng-model=\"")?;
        escape_into(binding, out)?;
        out.write_char('"')?;
    }

    out.write_char('>')?;

    match element.content() {
        Content::None => {}
        Content::Text(text) => escape_into(text, out)?,
        Content::Children(children) => {
            for child in children {
                render_element(child, out)?;
            }
        }
    }

    write!(out, "</{}>", element.tag())
}

fn escape_into(text: &str, out: &mut impl Write) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}
