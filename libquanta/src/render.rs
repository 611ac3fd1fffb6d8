//! Table Renderer — `constexpr` массив / `constexpr` array literal
//!
//! Формат / Format:
//!   constexpr int TIME_SLICE_QUANTA[16] = {
//!       10, 11, 12, 13, 15, 16, 18, 19,
//!       21, 24, 26, 29, 31, 35, 38, 42
//!   };

use core::fmt::Write;
use core::num::NonZeroUsize;

use crate::{QuantaError, Result};

/// Значений в строке / Values per row
pub const DEFAULT_ROW_WIDTH: usize = 8;

pub const DEFAULT_ARRAY_NAME: &str = "TIME_SLICE_QUANTA";
pub const DEFAULT_ELEM_TYPE:  &str = "int";
const DEFAULT_INDENT:         &str = "    ";

/// Оформление таблицы / Table style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    pub name:      String,
    pub elem_type: String,
    pub indent:    String,
    pub row_width: NonZeroUsize,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            name:      DEFAULT_ARRAY_NAME.to_string(),
            elem_type: DEFAULT_ELEM_TYPE.to_string(),
            indent:    DEFAULT_INDENT.to_string(),
            row_width: row_width_or_one(DEFAULT_ROW_WIDTH),
        }
    }
}

impl TableStyle {
    /// Set the array identifier. Rejects anything that is not a C identifier.
    pub fn with_name(mut self, name: &str) -> Result<Self> {
        if !is_c_identifier(name) {
            return Err(QuantaError::invalid(
                "name",
                format!("`{name}` is not a valid C identifier"),
            ));
        }
        self.name = name.to_string();
        Ok(self)
    }

    pub fn with_elem_type(mut self, elem_type: &str) -> Self {
        self.elem_type = elem_type.to_string();
        self
    }

    pub fn with_row_width(mut self, row_width: NonZeroUsize) -> Self {
        self.row_width = row_width;
        self
    }
}

fn row_width_or_one(width: usize) -> NonZeroUsize {
    NonZeroUsize::new(width).unwrap_or(NonZeroUsize::MIN)
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Вывести таблицу со стандартным оформлением.
/// Render with the default style; a `row_width` of 0 is treated as 1.
pub fn render(values: &[u64], row_width: usize) -> String {
    let style = TableStyle::default().with_row_width(row_width_or_one(row_width));
    render_with(values, &style)
}

/// Вывести таблицу / Render the table.
///
/// Empty input gives a declaration with no rows rather than an error.
pub fn render_with(values: &[u64], style: &TableStyle) -> String {
    let mut out = String::new();
    // write! в String не может упасть / write! into a String cannot fail
    let _ = writeln!(
        out,
        "constexpr {} {}[{}] = {{",
        style.elem_type,
        style.name,
        values.len()
    );

    let mut rows = values.chunks(style.row_width.get()).peekable();
    while let Some(row) = rows.next() {
        out.push_str(&style.indent);
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{value}");
        }
        if rows.peek().is_some() {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str("};\n");
    out
}
