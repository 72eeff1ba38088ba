use std::collections::HashMap;

/// Occurrence count of every distinct symbol in a text.
pub type FrequencyTable = HashMap<char, usize>;

pub fn count_frequencies(text: &str) -> FrequencyTable {
    let mut freq_map = HashMap::new();
    for symbol in text.chars() {
        *freq_map.entry(symbol).or_insert(0) += 1;
    }
    freq_map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_symbol() {
        let freq = count_frequencies("aabccc");
        assert_eq!(freq.len(), 3);
        assert_eq!(freq.get(&'a'), Some(&2));
        assert_eq!(freq.get(&'b'), Some(&1));
        assert_eq!(freq.get(&'c'), Some(&3));
    }

    #[test]
    fn counts_sum_to_char_length() {
        let text = "héllo wörld";
        let freq = count_frequencies(text);
        assert_eq!(freq.values().sum::<usize>(), text.chars().count());
        assert_eq!(freq.get(&'ö'), Some(&1));
        assert_eq!(freq.get(&'l'), Some(&3));
    }

    #[test]
    fn empty_text_gives_empty_table() {
        assert!(count_frequencies("").is_empty());
    }
}
