//! Static lookup tables: genre emojis, genre names and last-resort fallbacks.
//!
//! All tables are `const` data, shared read-only by every generation call.

/// Used when none of a movie's genres has an emoji mapping.
pub const FALLBACK_EMOJIS: &[&str] = &["🎬", "🍿", "🎥"];

/// Odd-one-out outsiders when the pool search comes up empty.
/// The first name that is not in the anchor's cast wins.
pub const FALLBACK_OUTSIDERS: &[&str] = &["Nicolas Cage", "Danny Trejo", "Christopher Walken", "Tilda Swinton"];

/// Placeholder keyword for an absent overview.
pub const KEYWORD_NO_TEXT: &str = "Cinema";
/// Placeholder keyword when no overview word survives filtering.
pub const KEYWORD_NO_CANDIDATE: &str = "Classic";

pub const GENERIC_GENRE: &str = "Cinema";

/// Words longer than five letters that carry no story signal.
pub const KEYWORD_STOPWORDS: &[&str] = &[
  "another", "against", "around", "before", "behind", "became", "becomes", "between",
  "during", "himself", "herself", "itself", "themselves", "something", "someone",
  "however", "through", "without", "within", "should", "people", "become", "finally",
  "family", "friends", "father", "mother", "cinema", "together", "discover", "discovers",
];

/// TMDB genre id -> emoji set.
pub fn genre_emojis(genre_id: i64) -> &'static [&'static str] {
  match genre_id {
    28 => &["💥", "🔫", "🏎️", "👊"],
    12 => &["🗺️", "🧭", "🎒", "🌋"],
    16 => &["🎨", "👾", "🧚", "🦄"],
    35 => &["😂", "🤪", "🤡", "🎭"],
    80 => &["🚓", "💰", "🕵️", "🩸"],
    18 => &["😢", "🎭", "🎻", "💔"],
    14 => &["🧙‍♂️", "🐉", "🔮", "🧝"],
    27 => &["👻", "🪓", "🩸", "🧟"],
    10402 => &["🎵", "🎹", "🎤", "🎸"],
    9648 => &["🔍", "🧩", "🕵️‍♂️", "❓"],
    10749 => &["❤️", "💋", "💌", "🌹"],
    878 => &["👽", "🚀", "🤖", "🧬"],
    53 => &["😰", "💣", "🔪", "👀"],
    10752 => &["🪖", "🎖️", "💣", "✈️"],
    37 => &["🤠", "🌵", "🐎", "🔫"],
    _ => &[],
  }
}

/// TMDB genre id -> display name.
pub fn genre_name(genre_id: i64) -> Option<&'static str> {
  Some(match genre_id {
    28 => "Action",
    12 => "Adventure",
    16 => "Animation",
    35 => "Comedy",
    80 => "Crime",
    99 => "Documentary",
    18 => "Drama",
    10751 => "Family",
    14 => "Fantasy",
    36 => "History",
    27 => "Horror",
    10402 => "Music",
    9648 => "Mystery",
    10749 => "Romance",
    878 => "Science Fiction",
    53 => "Thriller",
    10752 => "War",
    37 => "Western",
    _ => return None,
  })
}
