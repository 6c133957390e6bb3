//! Simplified output records.
//!
//! Wire field names stay in Portuguese; absent values serialize as
//! JSON null rather than being dropped.

use cartaz_api::tmdb::TmdbEpisodeToAir;
use serde::Serialize;

/// A single listing entry (trending, category listings,
/// recommendations).
#[derive(Debug, Clone, Serialize)]
pub struct ListItem {
    /// TMDB identifier.
    pub id: u64,
    /// Display title.
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    /// Overview text.
    #[serde(rename = "sinopse")]
    pub synopsis: Option<String>,
    /// Vote average.
    #[serde(rename = "nota")]
    pub rating: Option<f64>,
    /// Release or first-air date.
    #[serde(rename = "data_lancamento")]
    pub release_date: Option<String>,
    /// Absolute poster URL.
    #[serde(rename = "poster")]
    pub poster: Option<String>,
    /// Absolute backdrop URL.
    #[serde(rename = "fundo")]
    pub backdrop: Option<String>,
    /// Media type discriminator (`movie` or `tv`).
    #[serde(rename = "tipo")]
    pub media_type: String,
}

/// Full movie detail record.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetail {
    /// TMDB identifier.
    pub id: u64,
    /// Display title.
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    /// Overview text.
    #[serde(rename = "sinopse")]
    pub synopsis: Option<String>,
    /// Vote average.
    #[serde(rename = "nota")]
    pub rating: Option<f64>,
    /// Absolute poster URL.
    #[serde(rename = "poster")]
    pub poster: Option<String>,
    /// Absolute backdrop URL.
    #[serde(rename = "fundo")]
    pub backdrop: Option<String>,
    /// Release date.
    #[serde(rename = "data_lancamento")]
    pub release_date: Option<String>,
    /// Runtime in minutes.
    #[serde(rename = "duracao")]
    pub runtime: Option<u32>,
    /// Age certification for the configured region, or `N/A`.
    #[serde(rename = "classificacao")]
    pub certification: String,
    /// Genre names.
    #[serde(rename = "generos")]
    pub genres: Vec<String>,
    /// Recommended titles.
    #[serde(rename = "recomendacoes")]
    pub recommendations: Vec<ListItem>,
}

/// Full TV series detail record.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesDetail {
    /// TMDB identifier.
    pub id: u64,
    /// Display title.
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    /// Overview text.
    #[serde(rename = "sinopse")]
    pub synopsis: Option<String>,
    /// Vote average.
    #[serde(rename = "nota")]
    pub rating: Option<f64>,
    /// Absolute poster URL.
    #[serde(rename = "poster")]
    pub poster: Option<String>,
    /// Absolute backdrop URL.
    #[serde(rename = "fundo")]
    pub backdrop: Option<String>,
    /// Total number of seasons.
    #[serde(rename = "temporadas")]
    pub seasons: Option<u32>,
    /// Total number of episodes.
    #[serde(rename = "episodios")]
    pub episodes: Option<u32>,
    /// Most recently aired episode, forwarded unchanged.
    #[serde(rename = "ultimo_episodio")]
    pub last_episode: Option<TmdbEpisodeToAir>,
    /// Next scheduled episode, forwarded unchanged.
    #[serde(rename = "proximo_episodio")]
    pub next_episode: Option<TmdbEpisodeToAir>,
    /// Age certification for the configured region, or `N/A`.
    #[serde(rename = "classificacao")]
    pub certification: String,
    /// Genre names.
    #[serde(rename = "generos")]
    pub genres: Vec<String>,
    /// Recommended titles.
    #[serde(rename = "recomendacoes")]
    pub recommendations: Vec<ListItem>,
}

/// A recently aired episode of a changed series.
#[derive(Debug, Clone, Serialize)]
pub struct RecentEpisode {
    /// Parent series ID.
    #[serde(rename = "serie_id")]
    pub series_id: u64,
    /// Series title.
    #[serde(rename = "titulo")]
    pub series_title: Option<String>,
    /// Absolute series poster URL.
    #[serde(rename = "poster")]
    pub poster: Option<String>,
    /// Episode title.
    #[serde(rename = "episodio_titulo")]
    pub episode_title: Option<String>,
    /// Episode overview.
    #[serde(rename = "episodio_sinopse")]
    pub episode_synopsis: Option<String>,
    /// Season number.
    #[serde(rename = "temporada")]
    pub season: Option<u32>,
    /// Episode number.
    #[serde(rename = "episodio")]
    pub episode: Option<u32>,
    /// Air date.
    #[serde(rename = "data_lancamento")]
    pub air_date: Option<String>,
    /// Episode vote average.
    #[serde(rename = "nota")]
    pub rating: Option<f64>,
}
