//! Seed catalog data
//!
//! The fixed movie and director sets the server starts with. Director
//! records are keyed by movie title; nothing links a runtime-added movie to
//! a director.

use marquee_types::{Director, Movie};
use std::collections::HashMap;

pub fn movies() -> Vec<Movie> {
    vec![
        // Action
        Movie::new("Avengers: Endgame", "Action", 2019),
        Movie::new("Mad Max: Fury Road", "Action", 2015),
        Movie::new("John Wick", "Action", 2014),
        Movie::new("The Dark Knight", "Action", 2008),
        // Comedy
        Movie::new("The Grand Budapest Hotel", "Comedy", 2014),
        Movie::new("Superbad", "Comedy", 2007),
        Movie::new("Borat", "Comedy", 2006),
        Movie::new("Anchorman", "Comedy", 2004),
        // Drama
        Movie::new("Parasite", "Drama", 2019),
        Movie::new("The Shawshank Redemption", "Drama", 1994),
        Movie::new("Forrest Gump", "Drama", 1994),
        Movie::new("Schindler’s List", "Drama", 1993),
    ]
}

pub fn directors() -> HashMap<String, Director> {
    let entries = [
        (
            "Avengers: Endgame",
            Director::new("Anthony and Joe Russo", 50, awards(&["MTV Movie Award"])),
        ),
        (
            "Mad Max: Fury Road",
            Director::new("George Miller", 77, awards(&["Academy Award"])),
        ),
        (
            "John Wick",
            Director::new("Chad Stahelski", 53, awards(&["None"])),
        ),
        (
            "The Dark Knight",
            Director::new("Christopher Nolan", 52, awards(&["Saturn Award"])),
        ),
        (
            "The Grand Budapest Hotel",
            Director::new("Wes Anderson", 52, awards(&["Silver Bear Award"])),
        ),
        (
            "Superbad",
            Director::new("Greg Mottola", 57, awards(&["None"])),
        ),
        (
            "Borat",
            Director::new("Larry Charles", 66, awards(&["AFI Movie of the Year Award"])),
        ),
        (
            "Anchorman",
            Director::new("Adam McKay", 54, awards(&["BAFTA Award"])),
        ),
        (
            "Parasite",
            Director::new(
                "Bong Joon-ho",
                53,
                awards(&[
                    "Academy Award for Best Picture",
                    "Academy Award for Best Director",
                ]),
            ),
        ),
        (
            "The Shawshank Redemption",
            Director::new(
                "Frank Darabont",
                63,
                awards(&["Nominated for Academy Award for Best Picture"]),
            ),
        ),
        (
            "Forrest Gump",
            Director::new(
                "Robert Zemeckis",
                71,
                awards(&["Academy Award for Best Director"]),
            ),
        ),
        (
            "Schindler’s List",
            Director::new(
                "Steven Spielberg",
                76,
                awards(&[
                    "Academy Award for Best Director",
                    "Academy Award for Best Picture",
                ]),
            ),
        ),
    ];

    entries
        .into_iter()
        .map(|(title, director)| (title.to_string(), director))
        .collect()
}

fn awards(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
