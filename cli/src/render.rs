use std::io::{Result, Write};

use recipe_discovery_backend::view::{
    RecipeDetail, RecipeRow, ResultsSummary, NO_RESULTS_HINT, NO_RESULTS_TITLE,
};
use recipe_discovery_backend::RecipeBrowser;
use recipe_discovery_model::Recipe;

const HEADERS: [&str; 5] = ["Recipe Title", "Cuisine", "Rating", "Total Time", "Serves"];

fn cells(row: &RecipeRow) -> [&str; 5] {
    [
        row.title.as_str(),
        row.cuisine.as_str(),
        row.rating.as_str(),
        row.total_time.as_str(),
        row.serves.as_str(),
    ]
}

fn write_line<W: Write>(out: &mut W, cells: &[&str; 5], widths: &[usize; 5]) -> Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}

pub fn list<W: Write>(out: &mut W, browser: &RecipeBrowser) -> Result<()> {
    let page = browser.current_page();
    writeln!(
        out,
        "{} ({} per page)",
        ResultsSummary::from(&page),
        page.page_size
    )?;
    writeln!(out)?;
    if page.is_empty() {
        writeln!(out, "{NO_RESULTS_TITLE}")?;
        return writeln!(out, "{NO_RESULTS_HINT}");
    }

    let rows = page
        .items
        .iter()
        .map(|recipe| RecipeRow::from(*recipe))
        .collect::<Vec<_>>();
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(cells(row)) {
            *width = (*width).max(cell.chars().count());
        }
    }
    write_line(out, &HEADERS, &widths)?;
    for row in &rows {
        write_line(out, &cells(row), &widths)?;
    }
    if let Some(controls) = page.controls() {
        writeln!(out)?;
        writeln!(out, "{controls}")?;
    }
    Ok(())
}

pub fn detail<W: Write>(out: &mut W, recipe: &Recipe) -> Result<()> {
    write!(out, "{}", RecipeDetail::from(recipe))
}

pub fn cuisines<W: Write>(out: &mut W, cuisines: &[&str]) -> Result<()> {
    for cuisine in cuisines {
        writeln!(out, "{cuisine}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_discovery_backend::{FilterCriteria, PageSize, RecipeCollection, Threshold};

    fn rendered(browser: &RecipeBrowser) -> String {
        let mut out = Vec::new();
        list(&mut out, browser).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_browser() -> RecipeBrowser {
        RecipeBrowser::new(RecipeCollection::sample().unwrap(), PageSize::Fifteen)
    }

    #[test]
    fn lists_sample_without_pagination() {
        let text = rendered(&sample_browser());
        assert!(text.starts_with("Showing 1-6 of 6 recipes (15 per page)\n"));
        assert!(text.contains("Recipe Title"));
        assert!(text.contains("Japanese Miso Glazed Salmon"));
        assert!(text.contains("25 min"));
        assert!(!text.contains("Previous"));
    }

    #[test]
    fn empty_results_show_hint() {
        let mut browser = sample_browser();
        browser.set_criteria(FilterCriteria::default().with_total_time(Threshold::at_most(5.0)));
        let text = rendered(&browser);
        assert!(text.contains(NO_RESULTS_TITLE));
        assert!(text.contains(NO_RESULTS_HINT));
        assert!(!text.contains("Recipe Title"));
    }

    #[test]
    fn columns_are_aligned() {
        let text = rendered(&sample_browser());
        let table = text.lines().skip(2).collect::<Vec<_>>();
        let cuisine_column = table[0].find("Cuisine").unwrap();
        assert_eq!(table[1].rfind("Mediterranean"), Some(cuisine_column));
    }

    #[test]
    fn detail_and_cuisines_render() {
        let browser = sample_browser();
        let mut out = Vec::new();
        detail(&mut out, &browser.source().recipes()[1]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Classic Italian Margherita Pizza [Italian]"));
        assert!(text.contains("Calories: 285 cal"));

        let mut out = Vec::new();
        cuisines(&mut out, &browser.cuisines()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Mediterranean\nItalian\nThai\nFrench\nJapanese\nMexican\n"
        );
    }
}
