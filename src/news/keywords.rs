use super::Category;

const SEARCH_TERMS: &[&str] = &[
    "green technology",
    "climate change",
    "sustainable energy",
    "renewable energy",
    "carbon emissions",
    "environmental protection",
    "climate resilience",
    "sustainability",
    "green energy",
    "solar power",
    "wind energy",
    "climate action",
    "environmental conservation",
    "green innovation",
    "climate adaptation",
    "waste management",
    "recycling",
    "sustainable agriculture",
];

// Any hit rejects the article outright, even when relevant terms also match.
const EXCLUDED: &[&str] = &[
    "netflix", "marvel", "hulk", "wolverine", "comic", "movie", "film", "series", "adaptation",
    "sports", "entertainment", "celebrity", "fashion", "gaming", "video game",
    "politics", "trump", "biden", "election", "president", "congress",
    "music", "musician", "song", "album", "artist", "concert",
    "streaming", "tv show", "anime", "cartoon",
    "fantasy", "superhero", "comic book", "graphic novel",
    "wedding", "shotgun", "parents", "scientist", "song release",
];

const RELEVANT: &[&str] = &[
    "green technology", "green tech", "climate change", "climate resilience",
    "sustainable energy", "renewable energy", "solar power", "wind energy",
    "carbon emissions", "carbon footprint", "carbon neutral", "carbon reduction",
    "environmental", "environment protection", "environmental conservation",
    "eco-friendly", "eco", "ecology", "ecosystem",
    "sustainability", "sustainable", "sustainable development",
    "climate action", "climate adaptation", "climate mitigation",
    "green energy", "clean energy", "renewable", "solar", "wind",
    "global warming", "greenhouse gas", "emissions reduction",
    "conservation", "biodiversity", "nature", "wildlife",
    "recycling", "recycle", "waste management", "waste reduction",
    "water conservation", "energy efficiency", "green building",
    "agriculture", "farming", "crop", "sustainable agriculture",
];

const RECYCLING_MARKERS: &[&str] = &["recycl", "waste"];
const COMMUNITY_MARKERS: &[&str] = &["community", "drive", "initiative", "volunteer"];

pub fn search_query() -> String {
    SEARCH_TERMS.join(" OR ")
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

/// Assigns a category by substring matching over the lowercased title and
/// description. `None` means the article is off-topic and should be dropped.
pub fn classify(title: Option<&str>, description: Option<&str>) -> Option<Category> {
    let title = title.filter(|t| !t.is_empty())?;
    let description = description.filter(|d| !d.is_empty())?;
    let text = format!("{title} {description}").to_lowercase();

    if contains_any(&text, EXCLUDED) || !contains_any(&text, RELEVANT) {
        return None;
    }

    if contains_any(&text, RECYCLING_MARKERS) {
        Some(Category::Recycling)
    } else if contains_any(&text, COMMUNITY_MARKERS) {
        Some(Category::Community)
    } else {
        Some(Category::Upcycling)
    }
}
