//! Simulation-path signal evaluation.
//!
//! Runs when no observed profile attributes are available. A ground-truth
//! flag drawn by the orchestrator selects which outcome distribution each
//! dimension samples from; the evaluators then fold the drawn outcomes and
//! the derived descriptive labels into the report.

use super::sampler::AgeTable;
use super::tables::*;
use crate::core::{AgeBucket, GroundTruth, ProfileReport, Severity, SignalOutcome};
use crate::platform::Platform;
use rand::Rng;

/// Probability that a reverse image search runs for a profile not already
/// suspected to be fake.
const REVERSE_SEARCH_SPOT_CHECK: f64 = 0.3;

/// Probability that a genuine profile turns out to belong to a public
/// figure whose photo appears elsewhere.
const PUBLIC_FIGURE_CHANCE: f64 = 0.1;

/// Run the full simulated evaluation for one profile.
pub fn evaluate<R: Rng + ?Sized>(
    report: &mut ProfileReport,
    running: &mut i32,
    truth: GroundTruth,
    rng: &mut R,
) {
    let fake = truth == GroundTruth::Fake;

    evaluate_privacy(report, running, fake, rng);

    match report.platform {
        Platform::Facebook => evaluate_facebook(report, running, fake, rng),
        Platform::Twitter => evaluate_twitter(report, running, fake, rng),
        Platform::Instagram => evaluate_instagram(report, running, fake, rng),
        Platform::Linkedin => evaluate_linkedin(report, running, fake, rng),
        Platform::Other => evaluate_generic(report, running, fake, rng),
    }

    evaluate_picture(report, running, fake, rng);

    // Reverse image search is not always worth running; fake suspects always
    // get one, the rest only a spot check.
    if fake || rng.gen_bool(REVERSE_SEARCH_SPOT_CHECK) {
        evaluate_reverse_image_search(report, running, fake, rng);
    }
}

fn evaluate_privacy<R: Rng + ?Sized>(
    report: &mut ProfileReport,
    running: &mut i32,
    fake: bool,
    rng: &mut R,
) {
    let private = rng.gen_bool(if fake { 0.7 } else { 0.3 });
    report.account_privacy = if private { "Private" } else { "Public" }.to_string();
    if private {
        let (delta, severity) = if fake {
            (15, Severity::Medium)
        } else {
            (5, Severity::Low)
        };
        report.apply_outcome(
            running,
            SignalOutcome::new("Account is private", delta, Some(severity)),
        );
    }
}

fn evaluate_facebook<R: Rng + ?Sized>(
    report: &mut ProfileReport,
    running: &mut i32,
    fake: bool,
    rng: &mut R,
) {
    let ages = if fake {
        &FACEBOOK_AGE_FAKE
    } else {
        &FACEBOOK_AGE_GENUINE
    };
    apply_age(report, running, ages, rng);

    let friends_table = if fake {
        &FACEBOOK_FRIENDS_FAKE
    } else {
        &FACEBOOK_FRIENDS_GENUINE
    };
    report.apply_outcome(running, friends_table.outcome(rng));

    let activity_table = if fake {
        &FACEBOOK_ACTIVITY_FAKE
    } else {
        &FACEBOOK_ACTIVITY_GENUINE
    };
    let activity = activity_table.outcome(rng);
    report.post_count = post_bucket(activity.delta, "Few (1-10)", "Some (10-50)", "Many (50+)");
    report.activity_pattern = pattern_label(&activity.description);
    report.apply_outcome(running, activity);

    let name = FACEBOOK_NAME.outcome(rng);
    report.name_consistency = consistency_label(name.delta);
    report.apply_outcome(running, name);
}

fn evaluate_twitter<R: Rng + ?Sized>(
    report: &mut ProfileReport,
    running: &mut i32,
    fake: bool,
    rng: &mut R,
) {
    let ages = if fake {
        &TWITTER_AGE_FAKE
    } else {
        &TWITTER_AGE_GENUINE
    };
    apply_age(report, running, ages, rng);

    let ratio_table = if fake {
        &TWITTER_RATIO_FAKE
    } else {
        &TWITTER_RATIO_GENUINE
    };
    let ratio = ratio_table.outcome(rng);
    report.follower_ratio = ratio_label(ratio.delta, 10);
    report.apply_outcome(running, ratio);

    let tweets_table = if fake {
        &TWITTER_TWEETS_FAKE
    } else {
        &TWITTER_TWEETS_GENUINE
    };
    let tweets = tweets_table.outcome(rng);
    report.post_count = post_bucket(tweets.delta, "Few (1-50)", "Some (50-500)", "Many (500+)");
    report.activity_pattern = pattern_label(&tweets.description);
    report.apply_outcome(running, tweets);

    let username = TWITTER_USERNAME.outcome(rng);
    report.name_consistency = consistency_label(username.delta);
    report.apply_outcome(running, username);
}

fn evaluate_instagram<R: Rng + ?Sized>(
    report: &mut ProfileReport,
    running: &mut i32,
    fake: bool,
    rng: &mut R,
) {
    let ages = if fake {
        &INSTAGRAM_AGE_FAKE
    } else {
        &INSTAGRAM_AGE_GENUINE
    };
    apply_age(report, running, ages, rng);

    let ratio_table = if fake {
        &INSTAGRAM_RATIO_FAKE
    } else {
        &INSTAGRAM_RATIO_GENUINE
    };
    let ratio = ratio_table.outcome(rng);
    report.follower_ratio = ratio_label(ratio.delta, 12);
    report.apply_outcome(running, ratio);

    let posts_table = if fake {
        &INSTAGRAM_POSTS_FAKE
    } else {
        &INSTAGRAM_POSTS_GENUINE
    };
    let posts = posts_table.outcome(rng);
    report.post_count = post_bucket(posts.delta, "Few (1-20)", "Some (20-100)", "Many (100+)");
    report.activity_pattern = pattern_label(&posts.description);
    report.apply_outcome(running, posts);

    let bio = INSTAGRAM_BIO.outcome(rng);
    report.apply_outcome(running, bio);
}

fn evaluate_linkedin<R: Rng + ?Sized>(
    report: &mut ProfileReport,
    running: &mut i32,
    fake: bool,
    rng: &mut R,
) {
    let ages = if fake {
        &LINKEDIN_AGE_FAKE
    } else {
        &LINKEDIN_AGE_GENUINE
    };
    apply_age(report, running, ages, rng);

    let connections_table = if fake {
        &LINKEDIN_CONNECTIONS_FAKE
    } else {
        &LINKEDIN_CONNECTIONS_GENUINE
    };
    report.apply_outcome(running, connections_table.outcome(rng));

    let experience_table = if fake {
        &LINKEDIN_EXPERIENCE_FAKE
    } else {
        &LINKEDIN_EXPERIENCE_GENUINE
    };
    report.apply_outcome(running, experience_table.outcome(rng));

    report.apply_outcome(running, LINKEDIN_SKILLS.outcome(rng));
}

fn evaluate_generic<R: Rng + ?Sized>(
    report: &mut ProfileReport,
    running: &mut i32,
    fake: bool,
    rng: &mut R,
) {
    let ages = if fake {
        &GENERIC_AGE_FAKE
    } else {
        &GENERIC_AGE_GENUINE
    };
    apply_age(report, running, ages, rng);

    let completeness_table = if fake {
        &GENERIC_COMPLETENESS_FAKE
    } else {
        &GENERIC_COMPLETENESS_GENUINE
    };
    let completeness = completeness_table.outcome(rng);
    if completeness.delta < 0 && completeness.description == "Profile has verified information" {
        report.verification_status = "Verified".to_string();
    }
    report.apply_outcome(running, completeness);

    let activity_table = if fake {
        &GENERIC_ACTIVITY_FAKE
    } else {
        &GENERIC_ACTIVITY_GENUINE
    };
    let activity = activity_table.outcome(rng);
    report.activity_pattern = activity.description.clone();
    report.apply_outcome(running, activity);

    let username = GENERIC_USERNAME.outcome(rng);
    report.name_consistency = consistency_label(username.delta);
    report.apply_outcome(running, username);
}

fn evaluate_picture<R: Rng + ?Sized>(
    report: &mut ProfileReport,
    running: &mut i32,
    fake: bool,
    rng: &mut R,
) {
    let table = if fake { &PICTURE_FAKE } else { &PICTURE_GENUINE };
    let drawn = table.sample(rng);
    report.image_authenticity = drawn.description.to_string();
    if drawn.delta != 0 {
        report.apply_outcome(
            running,
            SignalOutcome::new(
                format!("Profile picture: {}", drawn.description),
                drawn.delta,
                drawn.severity,
            ),
        );
    }
}

fn evaluate_reverse_image_search<R: Rng + ?Sized>(
    report: &mut ProfileReport,
    running: &mut i32,
    fake: bool,
    rng: &mut R,
) {
    if fake {
        if report.image_authenticity.to_lowercase().contains("stock") {
            report.reverse_image_match = "Found on multiple stock photo sites".to_string();
            report.apply_outcome(
                running,
                SignalOutcome::new(
                    "Profile picture found on stock photo sites",
                    20,
                    Some(Severity::High),
                ),
            );
        } else {
            report.reverse_image_match = "No matches found".to_string();
            report.apply_outcome(
                running,
                SignalOutcome::new(
                    "Reverse image search found no matches",
                    15,
                    Some(Severity::Medium),
                ),
            );
        }
    } else if rng.gen_bool(PUBLIC_FIGURE_CHANCE) {
        report.reverse_image_match = "Found on other social media".to_string();
        report.push_positive("Image appears on other genuine profiles");
    } else {
        report.reverse_image_match = "No significant matches found".to_string();
    }
}

fn apply_age<R: Rng + ?Sized>(
    report: &mut ProfileReport,
    running: &mut i32,
    table: &AgeTable,
    rng: &mut R,
) {
    let drawn = table.sample(rng);
    report.account_age = format_age_days(drawn.days);
    report.age_bucket = AgeBucket::from_days(drawn.days);
    report.apply_outcome(
        running,
        SignalOutcome::new(drawn.description, drawn.delta, None),
    );
}

fn format_age_days(days: i64) -> String {
    if days < 30 {
        format!("{days} days")
    } else if days < 365 {
        format!("{} months", days / 30)
    } else {
        format!("{} years", days / 365)
    }
}

fn post_bucket(delta: i32, few: &str, some: &str, many: &str) -> String {
    if delta > 5 {
        few.to_string()
    } else if delta > 0 {
        some.to_string()
    } else {
        many.to_string()
    }
}

fn ratio_label(delta: i32, suspicious_above: i32) -> String {
    if delta > suspicious_above {
        "Suspicious".to_string()
    } else if delta > 0 {
        "Questionable".to_string()
    } else {
        "Normal".to_string()
    }
}

fn consistency_label(delta: i32) -> String {
    if delta > 10 {
        "Suspicious".to_string()
    } else if delta > 0 {
        "Questionable".to_string()
    } else {
        "Appears genuine".to_string()
    }
}

/// Keep only the leading clause of a drawn description, up to and including
/// the first closing paren.
fn pattern_label(description: &str) -> String {
    match description.find(')') {
        Some(i) => description[..=i].to_string(),
        None => description.to_string(),
    }
}
