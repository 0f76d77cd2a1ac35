//! "Did you mean" suggestions for mistyped command names.

use super::REGISTRY;

/// A suggestion is only offered when the best match is at most this far
/// from what was typed.
pub const SUGGESTION_MAX_DISTANCE: usize = 2;

/// Unit-cost Levenshtein distance (insert, delete, substitute).
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost)
                .min(prev[j + 1] + 1)
                .min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

/// Closest registered command to `typed`, if close enough.
///
/// Candidates are ranked by distance, then by the longest common prefix
/// with the typed token (so `clr` suggests `clear`, not `cd`), then by
/// registry order.
pub fn closest_command(typed: &str) -> Option<&'static str> {
    let mut best: Option<(usize, usize, &'static str)> = None;
    for spec in REGISTRY {
        let distance = edit_distance(typed, spec.name);
        if distance > SUGGESTION_MAX_DISTANCE {
            continue;
        }
        let prefix = common_prefix_len(typed, spec.name);
        let better = match best {
            None => true,
            Some((bd, bp, _)) => distance < bd || (distance == bd && prefix > bp),
        };
        if better {
            best = Some((distance, prefix, spec.name));
        }
    }
    best.map(|(_, _, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance_basics() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("ls", "ls"), 0);
        assert_eq!(edit_distance("", "cat"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("clr", "clear"), 2);
        assert_eq!(edit_distance("catt", "cat"), 1);
    }

    #[test]
    fn test_exact_name_is_distance_zero_match() {
        assert_eq!(closest_command("pwd"), Some("pwd"));
    }

    #[test]
    fn test_clr_suggests_clear() {
        // cd and cat are also at distance 2; the common prefix breaks the tie.
        assert_eq!(closest_command("clr"), Some("clear"));
    }

    #[test]
    fn test_single_typo() {
        assert_eq!(closest_command("catt"), Some("cat"));
        assert_eq!(closest_command("mkdri"), Some("mkdir"));
        assert_eq!(closest_command("forutne"), Some("fortune"));
    }

    #[test]
    fn test_far_off_gets_nothing() {
        assert_eq!(closest_command("xyzzy"), None);
        assert_eq!(closest_command("bootstrap"), None);
    }
}
