// SPDX-License-Identifier: MPL-2.0
//! Legend entries for the active attribute.

use super::attribute::{Attribute, Scale};
use super::scale::Rgb;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub attribute: Attribute,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// i18n key of the legend title.
    pub fn title_key(&self) -> &'static str {
        self.attribute.i18n_key()
    }
}

/// Builds the legend for `attribute`.
///
/// Numeric attributes list `< t₀`, then `tᵢ₋₁ - tᵢ` for each inner bin, then
/// `> tₙ₋₁`. Every entry shows the color of its own bin.
pub fn legend(attribute: Attribute) -> Legend {
    let entries = match attribute.scale() {
        Scale::Ordinal(scale) => scale
            .entries()
            .iter()
            .map(|(name, color)| LegendEntry {
                label: (*name).to_string(),
                color: *color,
            })
            .collect(),
        Scale::Threshold(scale) => {
            let thresholds = scale.thresholds();
            let colors = scale.colors();
            let mut entries = Vec::with_capacity(colors.len());

            for (i, to) in thresholds.iter().enumerate() {
                let label = if i == 0 {
                    format!("< {}", format_legend_value(*to))
                } else {
                    format!(
                        "{} - {}",
                        format_legend_value(thresholds[i - 1]),
                        format_legend_value(*to)
                    )
                };
                entries.push(LegendEntry {
                    label,
                    color: colors[i],
                });
            }

            if let (Some(last), Some(color)) = (thresholds.last(), colors.last()) {
                entries.push(LegendEntry {
                    label: format!("> {}", format_legend_value(*last)),
                    color: *color,
                });
            }
            entries
        }
    };

    Legend { attribute, entries }
}

/// Formats a threshold for display: millions get an `M` suffix, everything
/// gets thousands separators and at most three decimals.
pub fn format_legend_value(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{}M", format_grouped(value / 1_000_000.0))
    } else {
        format_grouped(value)
    }
}

/// `1234567.891` → `1,234,567.891`; trailing fractional zeros are dropped.
pub fn format_grouped(value: f64) -> String {
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = rounded.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choropleth::scale::{BLUES, ORANGES};

    #[test]
    fn formats_thousands_and_millions() {
        assert_eq!(format_legend_value(5.0), "5");
        assert_eq!(format_legend_value(1000.0), "1,000");
        assert_eq!(format_legend_value(100_000.0), "100,000");
        assert_eq!(format_legend_value(1_000_000.0), "1M");
        assert_eq!(format_legend_value(500_000_000.0), "500M");
        assert_eq!(format_legend_value(2_500_000.0), "2.5M");
        assert_eq!(format_legend_value(1_234_567_000_000.0), "1,234,567M");
    }

    #[test]
    fn formats_fractions_with_three_decimals_at_most() {
        assert_eq!(format_legend_value(12.3456), "12.346");
        assert_eq!(format_legend_value(0.5), "0.5");
        assert_eq!(format_legend_value(-1500.0), "-1,500");
    }

    #[test]
    fn population_legend_labels() {
        let legend = legend(Attribute::Population);
        let labels: Vec<&str> = legend.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "< 100,000",
                "100,000 - 1M",
                "1M - 5M",
                "5M - 10M",
                "10M - 30M",
                "30M - 60M",
                "60M - 100M",
                "100M - 500M",
                "> 500M",
            ]
        );
        assert_eq!(legend.title_key(), "attribute-population");
    }

    #[test]
    fn each_entry_uses_its_own_bin_color() {
        let legend = legend(Attribute::Population);
        let colors: Vec<Rgb> = legend.entries.iter().map(|e| e.color).collect();
        assert_eq!(colors, BLUES.to_vec());

        let density = super::legend(Attribute::Density);
        assert_eq!(density.entries[0].label, "< 5");
        assert_eq!(density.entries[0].color, ORANGES[0]);
        assert_eq!(density.entries[8].label, "> 1,000");
    }

    #[test]
    fn continent_legend_lists_categories() {
        let legend = legend(Attribute::Continents);
        assert_eq!(legend.entries.len(), 6);
        assert_eq!(legend.entries[0].label, "Europe");
        assert_eq!(legend.entries[0].color, Rgb::hex(0xF1C232));
    }
}
