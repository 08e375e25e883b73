// crates/geoview-core/src/cities.rs

//! The static city table: a fixed fixture of names and populations rendered
//! with a derived size band per row.

use crate::dom::Element;
use crate::error::Result;
use crate::format::format_integer;
use crate::surface::Surface;

const TABLE_STYLE: &str = "border-collapse:collapse;margin-bottom:1rem;";
const CELL_STYLE: &str = "padding:6px 10px;border:1px solid #444;text-align:left;";

/// Below this a city is `Small`.
pub const MEDIUM_THRESHOLD: i64 = 100_000;
/// Below this (and at or above [`MEDIUM_THRESHOLD`]) a city is `Medium`.
pub const LARGE_THRESHOLD: i64 = 500_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRecord {
    pub name: String,
    pub population: i64,
}

impl CityRecord {
    pub fn new(name: impl Into<String>, population: i64) -> Self {
        Self {
            name: name.into(),
            population,
        }
    }

    pub fn size(&self) -> SizeBand {
        SizeBand::classify(self.population)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeBand {
    Small,
    Medium,
    Large,
}

impl SizeBand {
    pub fn classify(population: i64) -> Self {
        if population < MEDIUM_THRESHOLD {
            SizeBand::Small
        } else if population < LARGE_THRESHOLD {
            SizeBand::Medium
        } else {
            SizeBand::Large
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeBand::Small => "Small",
            SizeBand::Medium => "Medium",
            SizeBand::Large => "Large",
        }
    }
}

impl std::fmt::Display for SizeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The built-in fixture: four Wisconsin cities.
pub fn default_cities() -> Vec<CityRecord> {
    let names = ["Madison", "Milwaukee", "Green Bay", "Superior"];
    let population = [233_209, 594_833, 104_057, 27_244];
    zip_records(&names, &population)
}

/// Pairs two positionally aligned lists. Extra entries in the longer list
/// are ignored; the fixture lists are expected to be the same length.
pub fn zip_records(names: &[&str], population: &[i64]) -> Vec<CityRecord> {
    names
        .iter()
        .zip(population)
        .map(|(name, pop)| CityRecord::new(*name, *pop))
        .collect()
}

fn cell(tag: &str, text: impl Into<String>) -> Element {
    Element::new(tag).with_style(CELL_STYLE).with_text(text)
}

/// Renders the `City | Population | City Size` table.
pub fn render_city_table(cities: &[CityRecord]) -> Element {
    let header = Element::new("tr")
        .with_child(cell("th", "City"))
        .with_child(cell("th", "Population"))
        .with_child(cell("th", "City Size"));

    let mut table = Element::new("table").with_style(TABLE_STYLE).with_child(header);
    for city in cities {
        table.append(
            Element::new("tr")
                .with_child(cell("td", city.name.as_str()))
                .with_child(cell("td", format_integer(city.population)))
                .with_child(cell("td", city.size().label())),
        );
    }
    table
}

/// Renders the table and appends it to the container.
///
/// Fails with [`GeoViewError::MissingContainer`](crate::GeoViewError) when
/// the container does not exist; callers treat that as fatal.
pub fn mount_city_table<S: Surface + ?Sized>(
    surface: &mut S,
    container_id: &str,
    cities: &[CityRecord],
) -> Result<()> {
    log::debug!("rendering city table with {} rows", cities.len());
    surface.append_child(container_id, render_city_table(cities).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoViewError;
    use crate::surface::Page;
    use rstest::rstest;

    #[rstest]
    #[case(0, SizeBand::Small)]
    #[case(27_244, SizeBand::Small)]
    #[case(99_999, SizeBand::Small)]
    #[case(100_000, SizeBand::Medium)]
    #[case(499_999, SizeBand::Medium)]
    #[case(500_000, SizeBand::Large)]
    #[case(594_833, SizeBand::Large)]
    fn size_band_boundaries(#[case] population: i64, #[case] expected: SizeBand) {
        assert_eq!(SizeBand::classify(population), expected);
    }

    #[test]
    fn fixture_rows_render_in_order_with_formatted_population() {
        let table = render_city_table(&default_cities());
        let rows = table.elements_by_tag("tr");
        assert_eq!(rows.len(), 5);

        let texts: Vec<String> = rows[1..]
            .iter()
            .map(|r| {
                r.elements_by_tag("td")
                    .iter()
                    .map(|c| c.text_content())
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                "Madison|233,209|Medium",
                "Milwaukee|594,833|Large",
                "Green Bay|104,057|Medium",
                "Superior|27,244|Small",
            ]
        );
    }

    #[test]
    fn header_cells_are_styled() {
        let table = render_city_table(&[]);
        let headers = table.elements_by_tag("th");
        assert_eq!(headers.len(), 3);
        assert!(headers.iter().all(|h| h.attr("style") == Some(CELL_STYLE)));
    }

    #[test]
    fn mount_requires_container() {
        let mut page = Page::empty();
        let err = mount_city_table(&mut page, "mydiv", &default_cities()).unwrap_err();
        assert!(matches!(err, GeoViewError::MissingContainer(_)));

        let mut page = Page::new("mydiv");
        mount_city_table(&mut page, "mydiv", &default_cities()).unwrap();
        assert_eq!(page.root().elements_by_tag("table").len(), 1);
    }
}
