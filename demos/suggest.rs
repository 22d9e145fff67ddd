use spellset::{AvlSet, Set, WordChecker};

fn main() {
    let mut words: AvlSet<String> = AvlSet::new();
    for word in ["THE", "QUICK", "BROWN", "FOX", "JUMPS", "OVER", "LAZY", "DOG", "THEN"] {
        words.add(word.to_string());
    }

    let checker = WordChecker::new(&words);
    for word in ["QUICK", "TEH", "BORWN", "FOXX", "LAY", "THEDOG"] {
        if checker.word_exists(word) {
            println!("{word}: ok");
        } else {
            println!("{word}: {:?}", checker.find_suggestions(word));
        }
    }
}
