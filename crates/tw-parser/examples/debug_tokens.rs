use tracing_subscriber::EnvFilter;
use tw_parser::{find_language_in_string, tokenize, Segmenter};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let test_cases = vec![
        "Movie Title [1080p x264] [2010].mkv",
        "Tatort_12.11.17_20-15_ard_90_TVOON_DE.mpg.HQ.avi",
        "Star.Wars.Episode.IV.A.New.Hope.1977.REMASTERED.2160p.UHD.BluRay.x265-SWTYBLZ.mkv",
        "Amélie.2001.German.DL.1080p.mkv",
    ];

    let segmenter = Segmenter::default();
    for input in test_cases {
        println!("\n=== {} ===", input);
        let cleaned = segmenter.clean(input);
        println!("  cleaned: '{}'", cleaned);

        let pool = tokenize(&cleaned);
        for token in &pool.main {
            println!("  [{}] '{}'", token.position(), token.text());
        }
        if !pool.brackets.is_empty() {
            println!("  brackets: {:?}", pool.brackets);
        }

        let identity = segmenter.segment(input);
        println!("  title: '{}', year: {:?}", identity.title, identity.year);
        println!("  language: {:?}", find_language_in_string(&cleaned));
    }
}
