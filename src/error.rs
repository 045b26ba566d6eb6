#[derive(Debug, thiserror::Error)]
pub enum OverviewError {
    #[error("fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("found no card in cube called {0:?}")]
    CubeCardNotFound(String),

    #[error("found no cards for search {0:?}")]
    SearchCardNotFound(String),

    #[error("found {count} cards for search {query:?}")]
    TooManyCards { query: String, count: usize },

    #[error("{name} is used as the image for {count} decks")]
    RepeatedCard { name: String, count: usize },
}

pub type Result<T> = std::result::Result<T, OverviewError>;
