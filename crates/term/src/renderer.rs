//! Encodes a framebuffer as terminal output.
//!
//! The encoders only build bytes; printing them is left to the caller.

use anyhow::Result;

use crossterm::{
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    QueueableCommand,
};

use crate::fb::{FrameBuffer, GlyphStyle, Rgb};

/// Encode every row of `fb` with colors into `out`, rows separated by `\n`.
///
/// Styles are only re-emitted when they change; colors are reset at the end
/// of every row so the preview does not bleed into later output.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    for y in 0..fb.height() {
        let mut current_style: Option<GlyphStyle> = None;
        for x in 0..fb.width() {
            let glyph = fb.get(x, y).unwrap_or_default();
            if current_style != Some(glyph.style) {
                apply_style_into(out, glyph.style)?;
                current_style = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(Print('\n'))?;
    }
    Ok(())
}

/// Rows of `fb` as plain text, for logs that are not a terminal.
pub fn encode_plain(fb: &FrameBuffer) -> String {
    let mut s = String::new();
    for y in 0..fb.height() {
        s.push_str(fb.row_text(y).trim_end());
        s.push('\n');
    }
    s
}

fn apply_style_into(out: &mut Vec<u8>, style: GlyphStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
