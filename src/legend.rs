use serde::Serialize;

use crate::classify::DEPTH_BANDS;
use crate::utils::{escape_html, format_bound};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: String,
}

pub fn legend_entries() -> Vec<LegendEntry> {
    DEPTH_BANDS
        .iter()
        .enumerate()
        .map(|(index, band)| {
            let lower = format_bound(band.lower_km);
            let label = match DEPTH_BANDS.get(index + 1) {
                Some(next) => format!("{lower}km – {}km", format_bound(next.lower_km)),
                None => format!("{lower}+"),
            };
            LegendEntry {
                color: band.color,
                label,
            }
        })
        .collect()
}

pub fn render_legend_html(entries: &[LegendEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "<i style=\"background: {}\"></i> {}<br>",
                escape_html(entry.color),
                escape_html(&entry.label)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_has_one_entry_per_band_in_ascending_order() {
        let entries = legend_entries();
        let labels: Vec<&str> = entries.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "-10km – 10km",
                "10km – 30km",
                "30km – 50km",
                "50km – 70km",
                "70km – 90km",
                "90+",
            ]
        );
        let colors: Vec<&str> = entries.iter().map(|entry| entry.color).collect();
        assert_eq!(
            colors,
            vec!["green", "#e2ff03", "#ffb303", "#ff7d03", "#fa4002", "red"]
        );
    }

    #[test]
    fn legend_html_renders_swatches() {
        let html = render_legend_html(&legend_entries());
        assert_eq!(html.matches("<i style=").count(), 6);
        assert!(html.starts_with("<i style=\"background: green\"></i> -10km – 10km<br>"));
        assert!(html.ends_with("<i style=\"background: red\"></i> 90+<br>"));
    }
}
