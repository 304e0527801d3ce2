use avl_view::{
    deletion_order, render_json, render_text, Action, DeleteOrder, OutputFormat, Playback,
    ViewConfig, DEMO_KEYS,
};

fn config(keys: &[i64], order: DeleteOrder) -> ViewConfig {
    ViewConfig {
        keys: keys.to_vec(),
        delete_order: order,
        seed: Some(42),
        format: OutputFormat::Text,
        check: true,
    }
}

#[test]
fn demo_playback_ends_with_empty_grid() {
    let frames = Playback::run(&config(&DEMO_KEYS, DeleteOrder::Shuffled)).unwrap();
    assert_eq!(frames.len(), DEMO_KEYS.len() + 1);

    let first = &frames[0];
    assert_eq!(first.action, Action::Built { inserted: 16 });
    assert_eq!(first.size, 16);
    assert_eq!(first.height, 5);
    assert_eq!(first.grid.visible_count(), 16);

    for (i, frame) in frames.iter().enumerate().skip(1) {
        assert_eq!(frame.step, i);
        assert_eq!(frame.size, 16 - i);
        assert_eq!(frame.grid.visible_count(), frame.size);
        assert_eq!(frame.grid.height(), frame.height);
    }

    let last = frames.last().unwrap();
    assert_eq!(last.size, 0);
    assert!(last.grid.is_empty());
}

#[test]
fn deleted_keys_follow_configured_order() {
    let keys = [4, 1, 3];
    for (order, expected) in [
        (DeleteOrder::Input, vec![4, 1, 3]),
        (DeleteOrder::Reverse, vec![3, 1, 4]),
    ] {
        let frames = Playback::run(&config(&keys, order)).unwrap();
        let deleted: Vec<i64> = frames
            .iter()
            .filter_map(|f| match f.action {
                Action::Deleted { key } => Some(key),
                Action::Built { .. } => None,
            })
            .collect();
        assert_eq!(deleted, expected);
    }
}

#[test]
fn build_only_yields_single_frame() {
    let frames = Playback::run(&config(&[1, 2, 3], DeleteOrder::None)).unwrap();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].size, 3);
}

#[test]
fn shuffle_is_reproducible_from_seed() {
    let a = deletion_order(&DEMO_KEYS, DeleteOrder::Shuffled, 7);
    let b = deletion_order(&DEMO_KEYS, DeleteOrder::Shuffled, 7);
    assert_eq!(a, b);

    let mut sorted = a.clone();
    sorted.sort_unstable();
    let mut expected = DEMO_KEYS.to_vec();
    expected.sort_unstable();
    assert_eq!(sorted, expected);

    let playback = Playback::new(&config(&DEMO_KEYS, DeleteOrder::Shuffled));
    assert_eq!(playback.seed(), 42);
    assert_eq!(
        playback.pending().copied().collect::<Vec<_>>(),
        deletion_order(&DEMO_KEYS, DeleteOrder::Shuffled, 42)
    );
}

#[test]
fn empty_key_list_plays_one_empty_frame() {
    let frames = Playback::run(&config(&[], DeleteOrder::Shuffled)).unwrap();
    assert_eq!(frames.len(), 1);
    assert!(frames[0].grid.is_empty());
    assert_eq!(render_text(&frames[0]), "step 0: inserted 0 keys (size=0, height=0)\n(empty)\n");
}

#[test]
fn duplicate_keys_are_deleted_one_per_frame() {
    let frames = Playback::run(&config(&[2, 2, 1], DeleteOrder::Input)).unwrap();
    let sizes: Vec<usize> = frames.iter().map(|f| f.size).collect();
    assert_eq!(sizes, vec![3, 2, 1, 0]);
}

#[test]
fn text_frame_shows_grid() {
    let mut playback = Playback::new(&config(&[5, 10, 3], DeleteOrder::Input));
    let built = playback.next_frame().unwrap().unwrap();
    assert_eq!(
        render_text(&built),
        "step 0: inserted 3 keys (size=3, height=2)\n 5\n 3 10\n"
    );

    let deleted = playback.next_frame().unwrap().unwrap();
    assert_eq!(
        render_text(&deleted),
        "step 1: deleted 5 (size=2, height=2)\n10\n 3  .\n"
    );
    assert_eq!(playback.tree().keys(), vec![&3, &10]);
}

#[test]
fn json_frame_is_one_line() {
    let mut playback = Playback::new(&config(&[1], DeleteOrder::Input));
    let frame = playback.next_frame().unwrap().unwrap();
    let line = render_json(&frame).unwrap();
    assert!(line.ends_with('\n'));
    assert_eq!(line.matches('\n').count(), 1);

    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(value["step"], 0);
    assert_eq!(value["action"]["kind"], "built");
    assert_eq!(value["action"]["inserted"], 1);
    assert_eq!(value["grid"]["levels"][0][0]["label"], "1");
    assert_eq!(value["grid"]["levels"][0][0]["visible"], true);

    let frame = playback.next_frame().unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&render_json(&frame).unwrap()).unwrap();
    assert_eq!(value["action"], serde_json::json!({"kind": "deleted", "key": 1}));
    assert!(playback.next_frame().unwrap().is_none());
}
