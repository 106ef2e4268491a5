//! Integration tests for void_sign
//!
//! Exercises the facade against the in-memory grid.

use void_sign::*;
use void_text::{RichText, TextColor, TextStyle};
use void_voxel::{BlockFace, BlockState, CellPos, UpdateFlags};
use void_world::{MemoryWorld, WorldGrid};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn place(world: &MemoryWorld, cell: CellPos, state: BlockState) -> Sign<'_> {
    world.set_block_state(cell, state, UpdateFlags::DEFAULT);
    Sign::resolve(world, cell).expect("sign entity after placing sign block")
}

#[test]
fn test_set_text_always_yields_four_short_lines() {
    init_logging();
    let world = MemoryWorld::new("overworld");
    let sign = place(&world, CellPos::new(0, 64, 0), BlockState::sign_post(0));

    let inputs: Vec<Vec<Option<&str>>> = vec![
        vec![],
        vec![None],
        vec![Some("one"), None, Some("three")],
        vec![Some("a"), Some("b"), Some("c"), Some("d"), Some("e"), Some("f")],
        vec![Some("this is much longer than fifteen"); 4],
        vec![None, None, None, None],
    ];

    for input in inputs {
        sign.set_text(&input).expect("write");
        let text = sign.text().expect("read");
        assert_eq!(text.len(), 4);
        for (index, line) in text.iter().enumerate() {
            assert!(line.chars().count() <= 15, "line {} too long: {:?}", index, line);
            let expected_empty = matches!(input.get(index), None | Some(None));
            if expected_empty {
                assert_eq!(line, "");
            }
        }
    }
}

#[test]
fn test_set_text_is_idempotent() {
    init_logging();
    let world = MemoryWorld::new("overworld");
    let sign = place(&world, CellPos::new(1, 64, 0), BlockState::sign_post(3));

    sign.set_text(&[Some("Shop"), None, Some("open all day and night"), Some("é‽ unicode")])
        .expect("write");

    let first = sign.text().expect("read");
    sign.set_text_lines(&first).expect("write");
    let second = sign.text().expect("read");
    sign.set_text_lines(&second).expect("write");
    let third = sign.text().expect("read");

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn test_components_round_trip() {
    let world = MemoryWorld::new("overworld");
    let sign = place(&world, CellPos::new(2, 64, 0), BlockState::wall_sign(BlockFace::North));

    let components = [
        RichText::plain("Plain"),
        RichText::styled("Gold", TextStyle::new().with_color(TextColor::Gold)),
        RichText::plain("Mix ").with_segment("bold", TextStyle::new().bold()),
        RichText::styled("exactly fifteen", TextStyle::new().italic()),
    ];
    let input: Vec<Option<RichText>> = components.iter().cloned().map(Some).collect();

    sign.set_components(&input).expect("write");
    assert_eq!(sign.components().expect("read"), components);
    assert_eq!(sign.lines().expect("read"), components);
    assert_eq!(sign.text_on_line(2).expect("read").as_deref(), Some("Mix bold"));
}

#[test]
fn test_set_components_null_and_oversized() {
    let world = MemoryWorld::new("overworld");
    let sign = place(&world, CellPos::new(3, 64, 0), BlockState::sign_post(0));

    let long = RichText::plain("left ").with_segment("right side is long", TextStyle::new().bold());
    sign.set_components(&[Some(long), None]).expect("write");

    let lines = sign.components().expect("read");
    assert_eq!(lines[0].plain_text(), "left right side");
    assert!(lines[0].segments()[1].style.bold);
    assert_eq!(lines[1], RichText::empty());
    assert_eq!(lines[3], RichText::empty());
}

#[test]
fn test_truncation_boundary() {
    let world = MemoryWorld::new("overworld");
    let sign = place(&world, CellPos::new(4, 64, 0), BlockState::sign_post(0));

    sign.set_text_lines(&["abcdefghijklmnop", "abcdefghijklmno"]).expect("write");
    assert_eq!(sign.text_on_line(0).expect("read").as_deref(), Some("abcdefghijklmno"));
    assert_eq!(sign.text_on_line(1).expect("read").as_deref(), Some("abcdefghijklmno"));

    sign.set_text_on_line(Some("0123456789abcdefXYZ"), 2).expect("write");
    assert_eq!(sign.text_on_line(2).expect("read").as_deref(), Some("0123456789abcde"));

    sign.set_component_on_line(Some(RichText::plain("0123456789abcdefXYZ")), 3).expect("write");
    assert_eq!(sign.text_on_line(3).expect("read").as_deref(), Some("0123456789abcde"));
}

#[test]
fn test_line_bounds() {
    let world = MemoryWorld::new("overworld");
    let sign = place(&world, CellPos::new(5, 64, 0), BlockState::sign_post(0));

    assert_eq!(sign.text_on_line(-1), Ok(None));
    assert_eq!(sign.text_on_line(4), Ok(None));
    assert_eq!(sign.component_on_line(-1), Ok(None));
    assert_eq!(sign.component_on_line(4), Ok(None));
    for line in 0..=3 {
        assert!(sign.text_on_line(line).expect("read").is_some());
        assert!(sign.component_on_line(line).expect("read").is_some());
    }

    sign.set_text_lines(&["keep", "keep", "keep", "keep"]).expect("write");
    sign.set_text_on_line(Some("ignored"), 4).expect("no-op");
    sign.set_text_on_line(Some("ignored"), -1).expect("no-op");
    sign.set_component_on_line(Some(RichText::plain("ignored")), 7).expect("no-op");
    assert_eq!(sign.text().expect("read"), ["keep", "keep", "keep", "keep"]);
}

#[test]
fn test_single_line_null_becomes_empty() {
    let world = MemoryWorld::new("overworld");
    let sign = place(&world, CellPos::new(6, 64, 0), BlockState::sign_post(0));

    sign.set_text_lines(&["a", "b", "c", "d"]).expect("write");
    sign.set_text_on_line(None, 1).expect("write");
    sign.set_component_on_line(None, 2).expect("write");
    assert_eq!(sign.text().expect("read"), ["a", "", "", "d"]);
    assert_eq!(sign.component_on_line(2), Ok(Some(RichText::empty())));
}

#[test]
fn test_mount_variants() {
    let world = MemoryWorld::new("overworld");
    let post = place(&world, CellPos::new(0, 64, 10), BlockState::sign_post(5));
    let wall = place(&world, CellPos::new(1, 64, 10), BlockState::wall_sign(BlockFace::West));

    assert!(post.is_sign_post() && !post.is_wall_sign());
    assert!(wall.is_wall_sign() && !wall.is_sign_post());
    assert_eq!(post.mount(), Some(SignMount::Post));
}

#[test]
fn test_attachment_resolution() {
    let world = MemoryWorld::new("overworld");
    let (x, y, z) = (7, 40, -3);
    let cell = CellPos::new(x, y, z);

    let cases = [
        (BlockFace::North, CellPos::new(x, y, z + 1)),
        (BlockFace::South, CellPos::new(x, y, z - 1)),
        (BlockFace::West, CellPos::new(x + 1, y, z)),
        (BlockFace::East, CellPos::new(x - 1, y, z)),
    ];
    for (facing, expected) in cases {
        let sign = place(&world, cell, BlockState::wall_sign(facing));
        assert_eq!(sign.block_attached(), Some(expected), "facing {}", facing);
    }

    for rotation in [0, 7, 15] {
        let sign = place(&world, cell, BlockState::sign_post(rotation));
        assert_eq!(sign.block_attached(), Some(CellPos::new(x, y - 1, z)));
    }

    let sign = place(&world, cell, BlockState::wall_sign(BlockFace::Down));
    assert_eq!(sign.block_attached(), None);
}

#[test]
fn test_equality() {
    let world = MemoryWorld::new("overworld");
    let a_cell = CellPos::new(0, 64, 20);
    let b_cell = CellPos::new(1, 64, 20);
    let a = place(&world, a_cell, BlockState::sign_post(0));
    let b = place(&world, b_cell, BlockState::sign_post(0));

    a.set_text_lines(&["same", "text"]).expect("write");
    b.set_text_lines(&["same", "text"]).expect("write");

    let a_again = Sign::resolve(&world, a_cell).expect("sign");
    assert_eq!(a, a_again);
    assert_ne!(a, b);

    a_again.set_text_on_line(Some("changed"), 0).expect("write");
    let a_third = Sign::resolve(&world, a_cell).expect("sign");
    assert_eq!(a, a_third);

    // Same coordinates in another world
    let nether = MemoryWorld::new("nether");
    let elsewhere = place(&nether, a_cell, BlockState::sign_post(0));
    elsewhere.set_text(&a.text().expect("read").each_ref().map(|s| Some(s.as_str()))).expect("write");
    assert_eq!(elsewhere.text(), a.text());
    assert_ne!(a, elsewhere);
}

#[test]
fn test_failed_write_leaves_no_partial_state() {
    let world = MemoryWorld::new("overworld");
    let cell = CellPos::new(0, 64, 30);
    let sign = place(&world, cell, BlockState::sign_post(0));
    sign.set_text_lines(&["1", "2", "3", "4"]).expect("write");

    world.set_block_state(cell, BlockState::AIR, UpdateFlags::DEFAULT);
    assert_eq!(
        sign.set_text_lines(&["w", "x", "y", "z"]),
        Err(SignError::Detached { cell })
    );
    assert!(world.block_entity(cell).is_none());

    // A new sign in the cell starts blank; nothing leaked from the failed write
    let fresh = place(&world, cell, BlockState::sign_post(0));
    assert_eq!(fresh.text().expect("read"), ["", "", "", ""]);
}
