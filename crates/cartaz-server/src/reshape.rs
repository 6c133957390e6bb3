//! Pure upstream-to-output reshaping functions.

use cartaz_api::tmdb::{
    TmdbContentRating, TmdbListItem, TmdbMovieDetails, TmdbRegionReleases, TmdbTvDetails,
};

use crate::models::{ListItem, MovieDetail, RecentEpisode, SeriesDetail};

/// Prefixes a relative image path with the CDN base URL.
fn image_url(image_base: &str, path: Option<&str>) -> Option<String> {
    path.map(|p| format!("{image_base}{p}"))
}

/// Resolves a movie certification from per-region release entries.
///
/// First matching region wins, its first nested entry is taken, and
/// anything empty or absent falls back to `N/A`.
fn movie_certification(regions: &[TmdbRegionReleases], region: &str) -> String {
    regions
        .iter()
        .find(|r| r.iso_3166_1 == region)
        .and_then(|r| r.release_dates.first())
        .and_then(|entry| entry.certification.clone())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| String::from("N/A"))
}

/// Resolves a TV certification from per-region content ratings.
fn tv_certification(ratings: &[TmdbContentRating], region: &str) -> String {
    ratings
        .iter()
        .find(|r| r.iso_3166_1 == region)
        .and_then(|r| r.rating.clone())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| String::from("N/A"))
}

/// Converts one upstream listing entry into a simplified record.
#[must_use]
pub fn to_list_item(raw: &TmdbListItem, image_base: &str) -> ListItem {
    ListItem {
        id: raw.id,
        title: raw.title.clone().or_else(|| raw.name.clone()),
        synopsis: raw.overview.clone(),
        rating: raw.vote_average,
        release_date: raw.release_date.clone().or_else(|| raw.first_air_date.clone()),
        poster: image_url(image_base, raw.poster_path.as_deref()),
        backdrop: image_url(image_base, raw.backdrop_path.as_deref()),
        media_type: raw
            .media_type
            .clone()
            .unwrap_or_else(|| String::from("movie")),
    }
}

/// Converts a slice of upstream listing entries.
#[must_use]
pub fn to_list_items(raw: &[TmdbListItem], image_base: &str) -> Vec<ListItem> {
    raw.iter().map(|item| to_list_item(item, image_base)).collect()
}

/// Reshapes a full movie detail response.
#[must_use]
pub fn movie_detail(raw: &TmdbMovieDetails, image_base: &str, region: &str) -> MovieDetail {
    MovieDetail {
        id: raw.id,
        title: raw.title.clone(),
        synopsis: raw.overview.clone(),
        rating: raw.vote_average,
        poster: image_url(image_base, raw.poster_path.as_deref()),
        backdrop: image_url(image_base, raw.backdrop_path.as_deref()),
        release_date: raw.release_date.clone(),
        runtime: raw.runtime,
        certification: raw
            .release_dates
            .as_ref()
            .map_or_else(|| String::from("N/A"), |r| movie_certification(&r.results, region)),
        genres: raw.genres.iter().map(|g| g.name.clone()).collect(),
        recommendations: raw
            .recommendations
            .as_ref()
            .map_or_else(Vec::new, |page| to_list_items(&page.results, image_base)),
    }
}

/// Reshapes a full TV series detail response.
#[must_use]
pub fn series_detail(raw: &TmdbTvDetails, image_base: &str, region: &str) -> SeriesDetail {
    SeriesDetail {
        id: raw.id,
        title: raw.name.clone(),
        synopsis: raw.overview.clone(),
        rating: raw.vote_average,
        poster: image_url(image_base, raw.poster_path.as_deref()),
        backdrop: image_url(image_base, raw.backdrop_path.as_deref()),
        seasons: raw.number_of_seasons,
        episodes: raw.number_of_episodes,
        last_episode: raw.last_episode_to_air.clone(),
        next_episode: raw.next_episode_to_air.clone(),
        certification: raw
            .content_ratings
            .as_ref()
            .map_or_else(|| String::from("N/A"), |r| tv_certification(&r.results, region)),
        genres: raw.genres.iter().map(|g| g.name.clone()).collect(),
        recommendations: raw
            .recommendations
            .as_ref()
            .map_or_else(Vec::new, |page| to_list_items(&page.results, image_base)),
    }
}

/// Extracts a recent-episode record from bare series details.
///
/// Returns `None` when the series has no aired episode yet.
#[must_use]
pub fn recent_episode(raw: &TmdbTvDetails, image_base: &str) -> Option<RecentEpisode> {
    let last = raw.last_episode_to_air.as_ref()?;
    Some(RecentEpisode {
        series_id: raw.id,
        series_title: raw.name.clone(),
        poster: image_url(image_base, raw.poster_path.as_deref()),
        episode_title: last.name.clone(),
        episode_synopsis: last.overview.clone(),
        season: last.season_number,
        episode: last.episode_number,
        air_date: last.air_date.clone(),
        rating: last.vote_average,
    })
}
