//! Corpus-level folding of convention profiles.

use super::types::ConventionProfile;

/// Sum every frequency table of `other` into `target`.
pub fn merge_into(target: &mut ConventionProfile, other: &ConventionProfile) {
    target.prompts += other.prompts;

    for (name, count) in &other.tags {
        *target.tags.entry(name.clone()).or_default() += count;
    }
    for (syntax, tokens) in &other.variables {
        let bucket = target.variables.entry(*syntax).or_default();
        for (raw, count) in tokens {
            *bucket.entry(raw.clone()).or_default() += count;
        }
    }
    for (key, header) in &other.headers {
        let entry = target.headers.entry(key.clone()).or_default();
        entry.occurrences += header.occurrences;
        entry.prompts += header.prompts;
    }
    for (style, count) in &other.naming {
        *target.naming.entry(*style).or_default() += count;
    }
}

/// Fold profiles by summation. Associative and commutative; the empty
/// profile is the identity.
pub fn aggregate<'a, I>(profiles: I) -> ConventionProfile
where
    I: IntoIterator<Item = &'a ConventionProfile>,
{
    profiles
        .into_iter()
        .fold(ConventionProfile::default(), |mut acc, profile| {
            merge_into(&mut acc, profile);
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::discover;

    #[test]
    fn test_header_prompt_presence() {
        let a = discover("Task: one\nTask: two");
        let b = discover("Task: three");
        let c = discover("nothing here");
        let corpus = aggregate([&a, &b, &c]);

        assert_eq!(corpus.prompts, 3);
        let task = corpus.header("task");
        assert_eq!(task.occurrences, 3);
        assert_eq!(task.prompts, 2);
    }

    #[test]
    fn test_identity_and_order() {
        let a = discover("<Topic>x</Topic> {{a_b}}");
        let b = discover("@tag `userId`");

        assert_eq!(aggregate([&a]), a);
        assert_eq!(aggregate([&a, &b]), aggregate([&b, &a]));
        assert_eq!(aggregate(std::iter::empty()), ConventionProfile::default());
    }
}
