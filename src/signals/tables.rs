//! Static outcome distributions for the simulated signal evaluators.
//!
//! Every dimension carries two disjoint weighted distributions, one per
//! ground-truth branch. Fake-account distributions skew toward high positive
//! deltas and high severity; genuine distributions toward zero or negative
//! deltas. This asymmetry is what makes fake accounts statistically
//! out-score genuine ones over many draws while keeping per-draw noise.

use super::sampler::{age, row, AgeTable, OutcomeTable};
use crate::core::Severity::{High, Low, Medium};

// Facebook

pub static FACEBOOK_AGE_FAKE: AgeTable = AgeTable(&[
    age(15, "Account created very recently (less than 30 days)", 20),
    age(90, "Account is 1-6 months old", 15),
    age(270, "Account is 6-12 months old", 10),
    age(730, "Account is 1-3 years old", 5),
    age(1825, "Account is over 3 years old", 0),
]);

pub static FACEBOOK_AGE_GENUINE: AgeTable = AgeTable(&[
    age(15, "Account created very recently (less than 30 days)", 5),
    age(90, "Account is 1-6 months old", 2),
    age(270, "Account is 6-12 months old", 0),
    age(730, "Account is 1-3 years old", -5),
    age(1825, "Account is over 3 years old", -10),
]);

pub static FACEBOOK_FRIENDS_FAKE: OutcomeTable = OutcomeTable(&[
    row("Very few friends (<20)", 15, Some(High), 40),
    row("Many friends but few mutual connections", 10, Some(Medium), 30),
    row("Friends list mostly hidden", 8, Some(Medium), 20),
    row("Reasonable number of friends", 0, None, 5),
    row("Large network with connections", -5, None, 5),
]);

pub static FACEBOOK_FRIENDS_GENUINE: OutcomeTable = OutcomeTable(&[
    row("Very few friends (<20)", 5, Some(Low), 10),
    row("Many friends but few mutual connections", 2, Some(Low), 20),
    row("Friends list mostly hidden", 5, Some(Low), 10),
    row("Reasonable number of friends", -2, None, 40),
    row("Large network with connections", -5, None, 20),
]);

pub static FACEBOOK_ACTIVITY_FAKE: OutcomeTable = OutcomeTable(&[
    row("Very few posts (1-5 total)", 15, Some(High), 30),
    row("Posts only shared content, no original posts", 12, Some(High), 25),
    row("Irregular posting pattern (long gaps)", 8, Some(Medium), 20),
    row("Mostly inactive but some genuine posts", 5, Some(Medium), 15),
    row("Consistent activity with personal content", -5, None, 8),
    row("Verified activity patterns", -10, None, 2),
]);

pub static FACEBOOK_ACTIVITY_GENUINE: OutcomeTable = OutcomeTable(&[
    row("Regular posting activity", -5, None, 40),
    row("Mix of original and shared content", -3, None, 30),
    row("Some gaps in activity", 5, Some(Low), 15),
    row("Mostly inactive but some posts", 8, Some(Medium), 10),
    row("Verified activity patterns", -10, None, 5),
]);

/// Name plausibility is judged the same way for both ground-truth branches.
pub static FACEBOOK_NAME: OutcomeTable = OutcomeTable(&[
    row("Name contains numbers or special chars", 15, Some(High), 15),
    row("Name appears generic or auto-generated", 10, Some(Medium), 20),
    row("Name matches common fake name patterns", 12, Some(High), 10),
    row("Name appears genuine", -2, None, 50),
    row("Name matches verified identity", -8, None, 5),
]);

// Twitter / X

pub static TWITTER_AGE_FAKE: AgeTable = AgeTable(&[
    age(10, "Account created very recently (less than 2 weeks)", 25),
    age(45, "Account is 1-3 months old", 18),
    age(180, "Account is 3-12 months old", 12),
    age(548, "Account is 1-2 years old", 5),
    age(1460, "Account is over 3 years old", 0),
]);

pub static TWITTER_AGE_GENUINE: AgeTable = AgeTable(&[
    age(10, "Account created very recently (less than 2 weeks)", 5),
    age(45, "Account is 1-3 months old", 2),
    age(180, "Account is 3-12 months old", 0),
    age(548, "Account is 1-2 years old", -5),
    age(1460, "Account is over 3 years old", -10),
]);

pub static TWITTER_RATIO_FAKE: OutcomeTable = OutcomeTable(&[
    row(
        "Many followers but few following (possible bought followers)",
        18,
        Some(High),
        30,
    ),
    row("Following many but few followers", 12, Some(Medium), 25),
    row("Suspicious follower growth pattern", 15, Some(High), 15),
    row("Balanced follower ratio", 0, None, 25),
    row("Verified followers and engagement", -10, None, 5),
]);

pub static TWITTER_RATIO_GENUINE: OutcomeTable = OutcomeTable(&[
    row("Balanced follower ratio", -3, None, 50),
    row("Following slightly more than followers", 2, Some(Low), 20),
    row("Verified followers and engagement", -10, None, 10),
    row("Many followers but few following", 8, Some(Medium), 10),
    row("Following many but few followers", 5, Some(Low), 10),
]);

pub static TWITTER_TWEETS_FAKE: OutcomeTable = OutcomeTable(&[
    row("Very few tweets (1-10 total)", 18, Some(High), 25),
    row("Mostly retweets with little original content", 15, Some(High), 25),
    row("Tweets contain suspicious links or hashtags", 20, Some(High), 20),
    row("Irregular tweeting pattern", 8, Some(Medium), 15),
    row("Consistent, genuine engagement", -5, None, 10),
    row("Verified tweet patterns", -12, None, 5),
]);

pub static TWITTER_TWEETS_GENUINE: OutcomeTable = OutcomeTable(&[
    row("Regular tweeting activity", -5, None, 40),
    row("Mix of original tweets and retweets", -3, None, 30),
    row("Some gaps in activity", 5, Some(Low), 15),
    row("Mostly inactive but some tweets", 8, Some(Medium), 10),
    row("Verified tweet patterns", -12, None, 5),
]);

pub static TWITTER_USERNAME: OutcomeTable = OutcomeTable(&[
    row("Username contains random numbers/characters", 15, Some(High), 15),
    row("Username appears auto-generated", 12, Some(Medium), 20),
    row("Username mimics real accounts", 15, Some(High), 10),
    row("Username appears genuine", -3, None, 50),
    row("Username matches verified identity", -10, None, 5),
]);

// Instagram

pub static INSTAGRAM_AGE_FAKE: AgeTable = AgeTable(&[
    age(7, "Account created very recently (less than 1 week)", 25),
    age(30, "Account is 1-3 months old", 18),
    age(150, "Account is 3-12 months old", 12),
    age(438, "Account is 1-2 years old", 5),
    age(1095, "Account is over 3 years old", 0),
]);

pub static INSTAGRAM_AGE_GENUINE: AgeTable = AgeTable(&[
    age(7, "Account created very recently (less than 1 week)", 5),
    age(30, "Account is 1-3 months old", 2),
    age(150, "Account is 3-12 months old", 0),
    age(438, "Account is 1-2 years old", -5),
    age(1095, "Account is over 3 years old", -10),
]);

pub static INSTAGRAM_RATIO_FAKE: OutcomeTable = OutcomeTable(&[
    row("High follower count but low engagement", 20, Some(High), 30),
    row("Following many but few followers", 15, Some(Medium), 25),
    row("Suspicious follower growth pattern", 18, Some(High), 15),
    row("Balanced follower-to-following ratio", 0, None, 25),
    row("Verified followers and engagement", -12, None, 5),
]);

pub static INSTAGRAM_RATIO_GENUINE: OutcomeTable = OutcomeTable(&[
    row("Balanced follower-to-following ratio", -4, None, 50),
    row("Following slightly more than followers", 2, Some(Low), 20),
    row("Verified followers and engagement", -12, None, 10),
    row("High follower count but low engagement", 8, Some(Medium), 10),
    row("Following many but few followers", 5, Some(Low), 10),
]);

pub static INSTAGRAM_POSTS_FAKE: OutcomeTable = OutcomeTable(&[
    row("Very few posts (1-5 total)", 20, Some(High), 30),
    row("Posts have generic or stolen content", 18, Some(High), 25),
    row("Irregular posting pattern", 10, Some(Medium), 20),
    row("Mostly inactive but some genuine posts", 8, Some(Medium), 15),
    row("Consistent, high-quality content", -6, None, 8),
    row("Verified post patterns", -15, None, 2),
]);

pub static INSTAGRAM_POSTS_GENUINE: OutcomeTable = OutcomeTable(&[
    row("Regular posting activity", -5, None, 40),
    row("Mix of content types", -3, None, 30),
    row("Some gaps in activity", 5, Some(Low), 15),
    row("Mostly inactive but some posts", 8, Some(Medium), 10),
    row("Verified post patterns", -15, None, 5),
]);

pub static INSTAGRAM_BIO: OutcomeTable = OutcomeTable(&[
    row("Bio contains suspicious links", 15, Some(High), 15),
    row("Bio is empty or very generic", 10, Some(Medium), 20),
    row("Bio uses excessive emojis or spammy text", 12, Some(Medium), 10),
    row("Bio appears genuine and personalized", -4, None, 50),
    row("Bio links to verified profiles", -10, None, 5),
]);

// LinkedIn

pub static LINKEDIN_AGE_FAKE: AgeTable = AgeTable(&[
    age(30, "Account created recently (less than 2 months)", 20),
    age(120, "Account is 3-12 months old", 15),
    age(548, "Account is 1-2 years old", 8),
    age(1095, "Account is 3-5 years old", 5),
    age(2920, "Account is over 5 years old", 0),
]);

pub static LINKEDIN_AGE_GENUINE: AgeTable = AgeTable(&[
    age(30, "Account created recently (less than 2 months)", 5),
    age(120, "Account is 3-12 months old", 2),
    age(548, "Account is 1-2 years old", -5),
    age(1095, "Account is 3-5 years old", -8),
    age(2920, "Account is over 5 years old", -12),
]);

pub static LINKEDIN_CONNECTIONS_FAKE: OutcomeTable = OutcomeTable(&[
    row("Very few connections (<50)", 15, Some(High), 30),
    row("Many connections but few endorsements", 12, Some(Medium), 25),
    row(
        "Connections appear random or unprofessional",
        18,
        Some(High),
        15,
    ),
    row("Reasonable number of quality connections", 0, None, 25),
    row("Many connections with mutual endorsements", -10, None, 5),
]);

pub static LINKEDIN_CONNECTIONS_GENUINE: OutcomeTable = OutcomeTable(&[
    row("Reasonable number of quality connections", -4, None, 40),
    row("Many connections with mutual endorsements", -10, None, 20),
    row("Very few connections (<50)", 5, Some(Low), 10),
    row("Many connections but few endorsements", 2, Some(Low), 20),
    row("Connections appear random", 8, Some(Medium), 10),
]);

pub static LINKEDIN_EXPERIENCE_FAKE: OutcomeTable = OutcomeTable(&[
    row("Sparse or inconsistent work history", 15, Some(High), 25),
    row("Job titles seem exaggerated or fake", 18, Some(High), 20),
    row("Short durations at many companies", 12, Some(Medium), 25),
    row("Complete and consistent work history", -5, None, 25),
    row("Verified employment history", -12, None, 5),
]);

pub static LINKEDIN_EXPERIENCE_GENUINE: OutcomeTable = OutcomeTable(&[
    row("Complete and consistent work history", -5, None, 50),
    row("Verified employment history", -12, None, 10),
    row("Some gaps in employment", 5, Some(Low), 20),
    row("Short durations at some companies", 8, Some(Medium), 15),
    row("Job titles seem slightly exaggerated", 10, Some(Medium), 5),
]);

pub static LINKEDIN_SKILLS: OutcomeTable = OutcomeTable(&[
    row("Very few or no endorsed skills", 10, Some(Medium), 15),
    row("Skills don't match claimed experience", 15, Some(High), 10),
    row("Endorsements from suspicious accounts", 12, Some(Medium), 10),
    row("Relevant, well-endorsed skills", -4, None, 50),
    row("Verified skills and certifications", -10, None, 15),
]);

// Generic / unrecognized platforms

pub static GENERIC_AGE_FAKE: AgeTable = AgeTable(&[
    age(20, "Account created very recently (less than 1 month)", 20),
    age(75, "Account is 2-6 months old", 15),
    age(200, "Account is 6-12 months old", 10),
    age(548, "Account is 1-2 years old", 5),
    age(1460, "Account is over 3 years old", 0),
]);

pub static GENERIC_AGE_GENUINE: AgeTable = AgeTable(&[
    age(20, "Account created very recently (less than 1 month)", 5),
    age(75, "Account is 2-6 months old", 2),
    age(200, "Account is 6-12 months old", 0),
    age(548, "Account is 1-2 years old", -5),
    age(1460, "Account is over 3 years old", -10),
]);

pub static GENERIC_COMPLETENESS_FAKE: OutcomeTable = OutcomeTable(&[
    row("Profile has very little information", 15, Some(High), 30),
    row("Profile missing key sections", 10, Some(Medium), 25),
    row("Profile appears complete but generic", 8, Some(Medium), 25),
    row("Profile has detailed, personalized information", 0, None, 15),
    row("Profile has verified information", -12, None, 5),
]);

pub static GENERIC_COMPLETENESS_GENUINE: OutcomeTable = OutcomeTable(&[
    row("Profile has detailed, personalized information", -4, None, 50),
    row("Profile has verified information", -12, None, 10),
    row("Profile missing some sections", 5, Some(Low), 20),
    row("Profile appears complete but generic", 2, Some(Low), 15),
    row("Profile has very little information", 8, Some(Medium), 5),
]);

pub static GENERIC_ACTIVITY_FAKE: OutcomeTable = OutcomeTable(&[
    row("Very few posts or activity", 15, Some(High), 30),
    row("Posts contain suspicious links or content", 18, Some(High), 25),
    row("Irregular activity pattern", 10, Some(Medium), 20),
    row("Some genuine activity but mostly inactive", 8, Some(Medium), 20),
    row("Consistent, genuine activity", -5, None, 5),
]);

pub static GENERIC_ACTIVITY_GENUINE: OutcomeTable = OutcomeTable(&[
    row("Consistent, genuine activity", -5, None, 40),
    row("Regular activity with some gaps", -2, None, 30),
    row("Some gaps in activity", 5, Some(Low), 15),
    row("Mostly inactive but some activity", 8, Some(Medium), 10),
    row("Very few posts or activity", 10, Some(Medium), 5),
]);

pub static GENERIC_USERNAME: OutcomeTable = OutcomeTable(&[
    row("Username contains random characters/numbers", 15, Some(High), 15),
    row("Username appears auto-generated", 12, Some(Medium), 20),
    row("Username mimics real accounts", 15, Some(High), 10),
    row("Username appears genuine", -3, None, 50),
    row("Username matches verified identity", -10, None, 5),
]);

// Shared across platforms

pub static PICTURE_FAKE: OutcomeTable = OutcomeTable(&[
    row("AI-generated image (non-existent person)", 25, Some(High), 40),
    row("Stock photo or celebrity picture", 20, Some(High), 30),
    row("Low quality/blurry image", 15, Some(Medium), 20),
    row("No face visible", 15, Some(Medium), 10),
    row("Genuine-looking photo", 0, None, 10),
]);

pub static PICTURE_GENUINE: OutcomeTable = OutcomeTable(&[
    row("Genuine personal photo", -5, None, 60),
    row("Professional headshot", -3, None, 25),
    row("Low quality photo", 5, Some(Low), 10),
    row("No profile picture", 10, Some(Medium), 3),
    row("Potentially AI-generated", 15, Some(Medium), 2),
]);
