//! Small album/track/artist domain and the queries run over it.

use std::collections::BTreeSet;

use crate::joining::Joining;

/// Tracks longer than this many seconds count as long.
pub const LONG_TRACK_SECS: u32 = 60;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artist {
    pub name: String,
    pub nationality: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub length_secs: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Album {
    pub name: String,
    pub tracks: Vec<Track>,
    pub musicians: Vec<Artist>,
}

impl Artist {
    pub fn new(name: &str, nationality: &str) -> Self {
        Self { name: name.to_string(), nationality: nationality.to_string() }
    }
}

impl Track {
    pub fn new(name: &str, length_secs: u32) -> Self {
        Self { name: name.to_string(), length_secs }
    }
}

pub fn find_long_tracks(albums: &[Album]) -> BTreeSet<String> {
    albums
        .iter()
        .flat_map(|album| &album.tracks)
        .filter(|track| track.length_secs > LONG_TRACK_SECS)
        .map(|track| track.name.clone())
        .collect()
}

/// `[name, name, ...]`
pub fn artist_names(artists: &[Artist]) -> String {
    artists.iter().map(|a| a.name.as_str()).join_with(", ", "[", "]")
}

/// Nationalities of the album's bands, i.e. musicians named "The ...".
pub fn nationality_report(album: &Album) -> BTreeSet<String> {
    album
        .musicians
        .iter()
        .filter(|artist| artist.name.starts_with("The"))
        .map(|artist| &artist.nationality)
        .inspect(|nation| tracing::trace!(%nation, "found nationality"))
        .cloned()
        .collect()
}

pub mod sample {
    use super::{Album, Artist, Track};

    pub fn john_coltrane() -> Artist {
        Artist::new("John Coltrane", "US")
    }

    pub fn beatles() -> Vec<Artist> {
        vec![
            Artist::new("John Lennon", "UK"),
            Artist::new("Paul McCartney", "UK"),
            Artist::new("George Harrison", "UK"),
            Artist::new("Ringo Starr", "UK"),
        ]
    }

    pub fn a_love_supreme() -> Album {
        Album {
            name: "A Love Supreme".into(),
            tracks: vec![Track::new("Acknowledgement", 467), Track::new("Resolution", 442)],
            musicians: vec![john_coltrane()],
        }
    }

    pub fn short_album() -> Album {
        Album {
            name: "Short".into(),
            tracks: vec![Track::new("Interlude", 30)],
            musicians: vec![Artist::new("The Beatles", "UK"), Artist::new("The Doors", "US")],
        }
    }
}
