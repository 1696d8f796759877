use crate::error::Result;
use crate::palettes::{minmax_color_scale, normalized_color_scale, Scaler};
use crate::styler::Styler;
use crate::table::{Summary, Table};
use log::*;

/// Text color laid over every cell, dark enough to read on both ends of the scale.
pub const COOL_GRAY_HEX: &str = "#242525";

fn cell_style(color: &str) -> String {
    format!("background-color: {}; color: {}", color, COOL_GRAY_HEX)
}

/// Values the normalized scaler has to clamp. NaN cells are not clamped, they take the
/// midpoint color.
fn count_outside_unit_range(table: &Table) -> usize {
    table
        .rows()
        .iter()
        .flatten()
        .filter(|v| !v.is_nan() && !(0.0..=1.0).contains(*v))
        .count()
}

/// Color `table` as a heatmap, picking the scaler by name.
///
/// Fails with [`crate::Error::UnsupportedScaler`] before anything is colored when the
/// name is neither `minmax` nor `normalized`.
pub fn render_heatmap<'a>(table: &'a Table, scaler: &str, reverse: bool) -> Result<Styler<'a>> {
    let scaler = scaler.parse::<Scaler>()?;
    Ok(heatmap_table(table, scaler, reverse))
}

pub fn heatmap_table(table: &Table, scaler: Scaler, reverse: bool) -> Styler<'_> {
    let (rows, columns) = table.shape();
    debug!(
        "Coloring {}x{} table with {} scaler{}",
        rows,
        columns,
        scaler,
        if reverse { ", reversed" } else { "" }
    );
    let styler = Styler::new(table);
    match scaler {
        Scaler::MinMax => styler.apply(|column| {
            let Summary { min, max } = Summary::of(column.iter().copied());
            if !(max > min) {
                debug!("Column has no spread, using the midpoint color");
            }
            column
                .iter()
                .map(|&v| cell_style(&minmax_color_scale(v, min, max, reverse)))
                .collect()
        }),
        Scaler::Normalized => {
            let outside = count_outside_unit_range(table);
            if outside > 0 {
                warn!(
                    "{} values are outside of 0 to 1 and will be clamped, consider the minmax scaler",
                    outside
                );
            }
            styler.applymap(|v| cell_style(&normalized_color_scale(v, reverse)))
        }
    }
}
