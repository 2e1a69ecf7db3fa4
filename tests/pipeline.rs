//! End-to-end pipeline: read parallel corpora, batch, pad.

use std::fs;

use preparar::{
    batch_iter, pad_sentences, read_corpus_plain, BatchConfig, BatchIter, CorpusReader, Example,
    Side, SubwordTokenizer,
};

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn word_pipeline_reads_batches_and_pads() {
    let dir = tempfile::tempdir().unwrap();
    let src_path = write_file(
        &dir,
        "train.de",
        "es regnete\nder Test schlug fehl\nein Satz\nnoch ein langer Satz hier\n",
    );
    let tgt_path = write_file(
        &dir,
        "train.en",
        "it was raining\nthe test failed\na sentence\nanother long sentence here\n",
    );

    let sources = read_corpus_plain(&src_path, Side::Source).unwrap();
    let targets = read_corpus_plain(&tgt_path, Side::Target).unwrap();
    assert_eq!(sources.len(), targets.len());

    let data: Vec<Example> = sources
        .into_iter()
        .zip(targets)
        .map(|(src, tgt)| Example::new(src, tgt))
        .collect();

    let mut total = 0;
    for (src_batch, tgt_batch) in batch_iter(data, 3, false).unwrap() {
        assert_eq!(src_batch.len(), tgt_batch.len());
        total += src_batch.len();

        // Descending source length within the batch
        for pair in src_batch.windows(2) {
            assert!(pair[0].len() >= pair[1].len());
        }

        // Targets keep their boundary tokens through batching
        for target in &tgt_batch {
            assert_eq!(target.first().map(String::as_str), Some("<s>"));
            assert_eq!(target.last().map(String::as_str), Some("</s>"));
        }

        let padded = pad_sentences(&src_batch, "<pad>").unwrap();
        let width = padded[0].len();
        assert!(padded.iter().all(|s| s.len() == width));
    }
    assert_eq!(total, 4);
}

#[test]
fn subword_pipeline_uses_side_named_models() {
    let dir = tempfile::tempdir().unwrap();

    let model = SubwordTokenizer::from_parts(
        vec!["▁a".into(), "b".into(), "c".into(), "▁ab".into()],
        vec![("▁a".into(), "b".into())],
    );
    model.save(dir.path().join("src.model")).unwrap();
    model.save(dir.path().join("tgt.model")).unwrap();

    let src_path = write_file(&dir, "train.de", "ab c\nabc\n");
    let tgt_path = write_file(&dir, "train.en", "c ab\nc\n");

    let sources = CorpusReader::subword(dir.path(), Side::Source, 4)
        .unwrap()
        .read(&src_path)
        .unwrap();
    let targets = CorpusReader::subword(dir.path(), Side::Target, 4)
        .unwrap()
        .read(&tgt_path)
        .unwrap();

    assert_eq!(sources[0], ["▁ab", "▁c"]);
    assert_eq!(sources[1], ["▁ab", "c"]);
    assert_eq!(targets[0], ["<s>", "▁c", "▁ab", "</s>"]);
    assert_eq!(targets[1], ["<s>", "▁c", "</s>"]);

    let data: Vec<Example> = sources
        .into_iter()
        .zip(targets)
        .map(|(src, tgt)| Example::new(src, tgt))
        .collect();

    let config = BatchConfig::new().with_batch_size(2).with_shuffle(true).with_seed(3);
    let batches: Vec<_> = BatchIter::new(data, &config).unwrap().collect();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].0.len(), 2);
}

#[test]
fn shuffled_epochs_cover_every_example() {
    let dir = tempfile::tempdir().unwrap();
    let lines: Vec<String> = (0..17).map(|i| format!("sentence number {i}")).collect();
    let path = write_file(&dir, "mono.txt", &(lines.join("\n") + "\n"));

    let corpus = read_corpus_plain(&path, Side::Source).unwrap();
    assert_eq!(corpus.len(), 17);

    // Two epochs over the same data; each must cover all examples.
    for seed in [1, 2] {
        let data: Vec<Example> = corpus
            .iter()
            .cloned()
            .map(|src| Example::new(src, vec!["<s>".into(), "</s>".into()]))
            .collect();
        let config = BatchConfig::new().with_batch_size(5).with_shuffle(true).with_seed(seed);

        let iter = BatchIter::new(data, &config).unwrap();
        assert_eq!(iter.num_batches(), 4);

        let mut ids: Vec<String> = iter
            .flat_map(|(src_batch, _)| src_batch)
            .map(|sentence| sentence[2].clone())
            .collect();
        ids.sort();
        let mut expected: Vec<String> = (0..17).map(|i| i.to_string()).collect();
        expected.sort();
        assert_eq!(ids, expected);
    }
}
