//! Localized request selectors.
//!
//! Path segments arrive in Portuguese and map onto the upstream
//! endpoint selectors.

use std::str::FromStr;

use cartaz_api::tmdb::{MovieListKind, TrendingWindow, TvListKind};

/// Rejected selector value, carrying the localized hint returned to
/// the caller.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{0}")]
pub struct SelectorError(pub String);

/// Trending time window (`hoje` or `semana`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingSelector {
    /// Last 24 hours.
    Today,
    /// Last 7 days.
    ThisWeek,
}

impl FromStr for TrendingSelector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hoje" => Ok(Self::Today),
            "semana" => Ok(Self::ThisWeek),
            _ => Err(SelectorError(String::from("Use 'hoje' ou 'semana'."))),
        }
    }
}

impl From<TrendingSelector> for TrendingWindow {
    fn from(selector: TrendingSelector) -> Self {
        match selector {
            TrendingSelector::Today => Self::Day,
            TrendingSelector::ThisWeek => Self::Week,
        }
    }
}

/// Movie listing category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieCategory {
    /// Most popular.
    Popular,
    /// Upcoming releases.
    Upcoming,
    /// Best rated.
    TopRated,
    /// Currently in theaters.
    NowPlaying,
}

impl FromStr for MovieCategory {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "populares" => Ok(Self::Popular),
            "lancamentos" => Ok(Self::Upcoming),
            "melhores" => Ok(Self::TopRated),
            "cartaz" => Ok(Self::NowPlaying),
            _ => Err(SelectorError(String::from(
                "Categoria inválida. Use: populares, lancamentos, melhores, cartaz.",
            ))),
        }
    }
}

impl From<MovieCategory> for MovieListKind {
    fn from(category: MovieCategory) -> Self {
        match category {
            MovieCategory::Popular => Self::Popular,
            MovieCategory::Upcoming => Self::Upcoming,
            MovieCategory::TopRated => Self::TopRated,
            MovieCategory::NowPlaying => Self::NowPlaying,
        }
    }
}

/// TV series listing category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesCategory {
    /// Most popular.
    Popular,
    /// Best rated.
    TopRated,
    /// Currently on the air.
    OnTheAir,
}

impl FromStr for SeriesCategory {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "populares" => Ok(Self::Popular),
            "melhores" => Ok(Self::TopRated),
            "cartaz" => Ok(Self::OnTheAir),
            _ => Err(SelectorError(String::from(
                "Categoria inválida. Use: populares, melhores, cartaz.",
            ))),
        }
    }
}

impl From<SeriesCategory> for TvListKind {
    fn from(category: SeriesCategory) -> Self {
        match category {
            SeriesCategory::Popular => Self::Popular,
            SeriesCategory::TopRated => Self::TopRated,
            SeriesCategory::OnTheAir => Self::OnTheAir,
        }
    }
}
