use platform_host::MediaLink;

const UNKNOWN_ARTIST: &str = "Unknown Artist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Song {
    pub title: String,
    pub artist: String,
    pub url: String,
}

impl Song {
    /// Reads `"<title> - <artist>"` names; anything else keeps the whole name as the title.
    pub fn from_link(link: &MediaLink) -> Self {
        let mut parts = link.name.split(" - ");
        let (title, artist) = match (parts.next(), parts.next()) {
            (Some(title), Some(artist)) => (title.to_string(), artist.to_string()),
            _ => (link.name.clone(), UNKNOWN_ARTIST.to_string()),
        };
        Self {
            title,
            artist,
            url: link.link.clone(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.artist.to_lowercase().contains(needle)
    }
}

pub(crate) fn songs_from_links(links: &[MediaLink]) -> Vec<Song> {
    links.iter().map(Song::from_link).collect()
}

pub(crate) fn filter_songs(songs: &[Song], query: &str) -> Vec<Song> {
    let needle = query.to_lowercase();
    songs
        .iter()
        .filter(|song| song.matches(&needle))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum MusicTab {
    #[default]
    Favourites,
    AllSongs,
}

impl MusicTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Favourites => "Favourites",
            Self::AllSongs => "All Songs",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Favourites => "My Music",
            Self::AllSongs => "Online Stream",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct PlayerState {
    pub current: Option<Song>,
    pub playing: bool,
}

impl PlayerState {
    /// Plays `song`, or toggles playback when it is already the current song.
    pub fn select(&mut self, song: Song) {
        if self.current.as_ref().is_some_and(|current| current.url == song.url) {
            self.playing = !self.playing;
        } else {
            self.current = Some(song);
            self.playing = true;
        }
    }

    pub fn toggle(&mut self) {
        if self.current.is_some() {
            self.playing = !self.playing;
        }
    }

    pub fn next(&mut self, list: &[Song]) {
        self.step(list, 1);
    }

    pub fn previous(&mut self, list: &[Song]) {
        self.step(list, -1);
    }

    /// Moves through `list` with wraparound. A current song missing from `list` starts at
    /// its first (forward) or last (backward) entry. Landing back on the current song
    /// toggles playback.
    fn step(&mut self, list: &[Song], delta: isize) {
        let Some(current) = self.current.as_ref() else {
            return;
        };
        if list.is_empty() {
            return;
        }
        let len = list.len() as isize;
        let next = match list.iter().position(|song| song.url == current.url) {
            Some(index) => (index as isize + delta).rem_euclid(len),
            None if delta > 0 => 0,
            None => len - 1,
        };
        self.select(list[next as usize].clone());
    }
}

/// `m:ss`; non-finite or negative times read `0:00`.
pub(crate) fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn link(name: &str, url: &str) -> MediaLink {
        MediaLink {
            name: name.to_string(),
            link: url.to_string(),
        }
    }

    fn songs() -> Vec<Song> {
        songs_from_links(&[
            link("Faded - Alan Walker", "/a.mp3"),
            link("Reality - Lost Frequencies", "/b.mp3"),
            link("Interlude", "/c.ogg"),
        ])
    }

    #[test]
    fn names_split_into_title_and_artist() {
        let songs = songs();
        assert_eq!(songs[0].title, "Faded");
        assert_eq!(songs[0].artist, "Alan Walker");
        assert_eq!(songs[2].title, "Interlude");
        assert_eq!(songs[2].artist, "Unknown Artist");
    }

    #[test]
    fn search_matches_title_or_artist() {
        let titles = |found: Vec<Song>| found.into_iter().map(|s| s.title).collect::<Vec<_>>();
        assert_eq!(titles(filter_songs(&songs(), "walker")), vec!["Faded"]);
        assert_eq!(titles(filter_songs(&songs(), "REAL")), vec!["Reality"]);
        assert_eq!(filter_songs(&songs(), "").len(), 3);
    }

    #[test]
    fn selecting_the_current_song_toggles_playback() {
        let list = songs();
        let mut player = PlayerState::default();
        player.select(list[0].clone());
        assert!(player.playing);
        player.select(list[0].clone());
        assert!(!player.playing);
        player.select(list[1].clone());
        assert!(player.playing);
        assert_eq!(player.current.as_ref().map(|s| s.url.as_str()), Some("/b.mp3"));
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let list = songs();
        let mut player = PlayerState::default();
        player.select(list[2].clone());
        player.next(&list);
        assert_eq!(player.current, Some(list[0].clone()));
        player.previous(&list);
        assert_eq!(player.current, Some(list[2].clone()));
    }

    #[test]
    fn stepping_within_a_single_song_list_toggles_playback() {
        let list = vec![songs()[0].clone()];
        let mut player = PlayerState::default();
        player.select(list[0].clone());
        player.next(&list);
        assert_eq!(player.current, Some(list[0].clone()));
        assert!(!player.playing);
        player.previous(&list);
        assert!(player.playing);
    }

    #[test]
    fn stepping_without_a_current_song_does_nothing() {
        let mut player = PlayerState::default();
        player.next(&songs());
        assert_eq!(player, PlayerState::default());
    }

    #[test]
    fn song_from_another_tab_restarts_at_the_list_edges() {
        let list = songs();
        let mut player = PlayerState::default();
        player.select(Song::from_link(&link("Elsewhere", "/z.mp3")));
        player.next(&list);
        assert_eq!(player.current, Some(list[0].clone()));

        player.select(Song::from_link(&link("Elsewhere", "/z.mp3")));
        player.previous(&list);
        assert_eq!(player.current, Some(list[2].clone()));
    }

    #[test]
    fn time_formats_as_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.9), "1:05");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }
}
