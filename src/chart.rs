use ratatui::style::Color;

use crate::domain::{AttributeVector, StatAxis};

/// Fixed series palette, indexed by position in the selection. Wraps if the
/// selection were ever larger than the palette.
pub const SERIES_PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::LightRed,
    Color::LightBlue,
];

pub const fn series_color(position: usize) -> Color {
    SERIES_PALETTE[position % SERIES_PALETTE.len()]
}

/// One polygon on the radar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct StatSeries {
    pub name: String,
    pub color: Color,
    /// One value per canonical axis, in axis order.
    pub values: [f64; 6],
}

/// The single live visualization model. Owned by the app state as an
/// `Option`; installing a new chart drops the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub series: Vec<StatSeries>,
}

/// Builds the chart dataset from the fetched attribute vectors, one series
/// per selected entry in selection order.
pub fn build_dataset(vectors: &[AttributeVector]) -> ChartData {
    let series = vectors
        .iter()
        .enumerate()
        .map(|(position, vector)| {
            let mut values = [0.0; 6];
            for (slot, axis) in values.iter_mut().zip(StatAxis::ALL) {
                *slot = f64::from(vector.value(axis));
            }

            StatSeries {
                name: vector.entity_name.clone(),
                color: series_color(position),
                values,
            }
        })
        .collect();

    ChartData { series }
}
