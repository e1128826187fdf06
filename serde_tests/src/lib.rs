#[cfg(test)]
mod tests {

    use ron;
    use starweave::rules;
    use starweave::*;

    fn corpus() -> Corpus {
        Corpus::from_iterator(vec![
            "bluegrab", "algebra", "garble", "burglar", "barge", "gable", "bagel", "beagle",
            "agree",
        ])
    }

    #[test]
    fn puzzle_serde() {
        let puzzle = Puzzle::from_letters(
            ['a', 'b', 'e', 'g', 'l', 'r', 'u'],
            &corpus(),
            rules::DEFAULT_MIN_LEN,
        )
        .unwrap();

        let ser = ron::to_string(&puzzle);
        assert!(ser.is_ok());

        let deser = ron::from_str::<Puzzle>(&ser.unwrap());
        assert!(deser.is_ok());
        assert_eq!(deser.unwrap(), puzzle);
    }

    #[test]
    fn generated_puzzle_serde() {
        let options = GeneratorOptions {
            min_answers: 5,
            ..GeneratorOptions::default()
        };
        let puzzle = generate(&corpus(), 42, &options).unwrap();

        let ser = ron::to_string(&puzzle).unwrap();
        let deser: Puzzle = ron::from_str(&ser).unwrap();

        assert_eq!(deser.max_score(), puzzle.max_score());
        assert_eq!(deser.judge("bluegrab"), puzzle.judge("bluegrab"));
    }
}
