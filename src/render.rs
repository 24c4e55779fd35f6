//! Text rendering for recipe records.
//!
//! Everything here is a pure function from a record to a string; the
//! binary decides where the output goes.

use crate::model::Meal;

/// The one external link a rendered recipe carries.
///
/// A record can hold both a source URL and a video URL; only one is ever
/// shown, and the source wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link<'a> {
    Source(&'a str),
    Youtube(&'a str),
}

impl<'a> Link<'a> {
    pub fn url(&self) -> &'a str {
        match self {
            Link::Source(url) | Link::Youtube(url) => url,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Link::Source(_) => "View Full Recipe",
            Link::Youtube(_) => "Watch on YouTube",
        }
    }
}

/// Pick the link to show for a record, source taking priority.
pub fn recipe_link(meal: &Meal) -> Option<Link<'_>> {
    if let Some(url) = meal.source() {
        Some(Link::Source(url))
    } else {
        meal.youtube().map(Link::Youtube)
    }
}

/// Join the present ingredient slots into one display line.
///
/// Slots render as "measure ingredient" in slot order; a slot with a
/// blank measure renders as the bare ingredient name.
pub fn ingredient_line(meal: &Meal) -> String {
    meal.ingredient_pairs()
        .iter()
        .map(|pair| match &pair.measure {
            Some(measure) => format!("{} {}", measure, pair.name),
            None => pair.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render one record as a text block, or nothing for a missing record.
pub fn render(meal: Option<&Meal>) -> String {
    meal.map(render_meal).unwrap_or_default()
}

/// Render one record as a text block.
pub fn render_meal(meal: &Meal) -> String {
    let mut out = String::new();
    if let Some(thumbnail) = &meal.thumbnail {
        out.push_str(thumbnail);
        out.push('\n');
    }
    out.push_str(&meal.name);
    out.push_str("\n\nIngredients:\n");
    out.push_str(&ingredient_line(meal));
    out.push_str("\n\nInstructions:\n");
    out.push_str(&meal.instructions);
    out.push('\n');
    if let Some(link) = recipe_link(meal) {
        out.push('\n');
        out.push_str(link.label());
        out.push_str(": ");
        out.push_str(link.url());
        out.push('\n');
    }
    out
}
