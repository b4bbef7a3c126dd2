use crate::commands::CmdResult;
use crate::model::Kind;

pub fn run(kind: Kind) -> CmdResult {
    CmdResult::default().with_genres(kind.genres().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_extend_screen_genres() {
        let movies = run(Kind::Movie).genres;
        let series = run(Kind::Series).genres;
        assert!(movies.iter().all(|g| series.contains(g)));
        assert!(series.contains(&"Talk-Show"));
        assert!(!movies.contains(&"Reality"));
    }
}
