//! Fixed exhibit catalog with case-insensitive substring lookup.

/// Reply returned when no exhibit name appears in the query.
pub const NO_MATCH_REPLY: &str = "I don't have information on that exhibit.";

/// A named artwork or artifact with its descriptive text.
#[derive(Debug, Clone)]
pub struct Exhibit {
    pub name: String,
    pub description: String,
}

struct Entry {
    exhibit: Exhibit,
    // Precomputed for the per-query scan.
    name_lower: String,
}

/// Immutable exhibit table, constructed once at startup.
///
/// Lookups scan entries in declaration order and the first name found as a
/// case-insensitive substring of the query wins. No scoring, no aggregation.
pub struct ExhibitCatalog {
    entries: Vec<Entry>,
}

impl ExhibitCatalog {
    pub fn new<I>(exhibits: I) -> Self
    where
        I: IntoIterator<Item = Exhibit>,
    {
        let entries = exhibits
            .into_iter()
            .map(|exhibit| Entry {
                name_lower: exhibit.name.to_lowercase(),
                exhibit,
            })
            .collect();
        Self { entries }
    }

    /// The built-in museum exhibit table.
    pub fn builtin() -> Self {
        Self::new([
            Exhibit {
                name: "Mona Lisa".to_string(),
                description: "The Mona Lisa is a portrait painting by the Italian artist \
                              Leonardo da Vinci, created in the early 16th century. It is one \
                              of the most famous works of art in the world."
                    .to_string(),
            },
            Exhibit {
                name: "The Starry Night".to_string(),
                description: "The Starry Night is an oil on canvas painting by Vincent van \
                              Gogh, painted in June 1889. It depicts a swirling night sky over \
                              a quiet town."
                    .to_string(),
            },
            Exhibit {
                name: "Tutankhamun's Mask".to_string(),
                description: "Tutankhamun's funerary mask is a gold mask of the pharaoh \
                              Tutankhamun, made in the 14th century BC. It is one of the most \
                              famous artifacts from ancient Egypt."
                    .to_string(),
            },
            Exhibit {
                name: "The Thinker".to_string(),
                description: "The Thinker is a bronze sculpture by Auguste Rodin, representing \
                              a man in deep contemplation. It was created in the late 19th \
                              century."
                    .to_string(),
            },
        ])
    }

    /// Find the first exhibit whose name appears in the query, ignoring case.
    pub fn find(&self, query: &str) -> Option<&Exhibit> {
        let query_lower = query.to_lowercase();
        self.entries
            .iter()
            .find(|entry| query_lower.contains(&entry.name_lower))
            .map(|entry| &entry.exhibit)
    }

    /// Answer a free-text question about an exhibit.
    ///
    /// A miss is a normal response, not an error: callers always get a reply.
    pub fn lookup(&self, query: &str) -> &str {
        self.find(query)
            .map(|exhibit| exhibit.description.as_str())
            .unwrap_or(NO_MATCH_REPLY)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
