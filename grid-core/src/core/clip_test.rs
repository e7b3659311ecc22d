//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::clip::ClipBox;

fn square(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Vec<(f64, f64)> {
    vec![(minx, miny), (maxx, miny), (maxx, maxy), (minx, maxy)]
}

#[test]
fn test_clip_box() {
    let clip = ClipBox::new(4096, 64);
    assert_eq!(clip.min, -64.0);
    assert_eq!(clip.max, 4160.0);
}

#[test]
fn test_inside() {
    let clip = ClipBox::new(4096, 64);
    let ring = square(0.0, 0.0, 32.0, 32.0);
    assert_eq!(clip.clip_ring(&ring), ring);
    // inside the buffer
    let ring = square(-64.0, -32.0, 0.0, 0.0);
    assert_eq!(clip.clip_ring(&ring), ring);
}

#[test]
fn test_outside() {
    let clip = ClipBox::new(4096, 64);
    assert!(clip.clip_ring(&square(-200.0, 0.0, -100.0, 32.0)).is_empty());
    assert!(clip.clip_ring(&square(5000.0, 5000.0, 5100.0, 5100.0)).is_empty());
    // touching the buffer border only
    assert!(clip.clip_ring(&square(-128.0, 0.0, -64.0, 32.0)).is_empty());
}

#[test]
fn test_partially_inside() {
    let clip = ClipBox::new(256, 0);
    let clipped = clip.clip_ring(&square(-100.0, 10.0, 100.0, 20.0));
    assert_eq!(clipped.len(), 4);
    for &(x, y) in &clipped {
        assert!(x >= 0.0 && x <= 100.0);
        assert!(y >= 10.0 && y <= 20.0);
    }
    assert!(clipped.contains(&(0.0, 10.0)));
    assert!(clipped.contains(&(0.0, 20.0)));
    assert!(clipped.contains(&(100.0, 10.0)));
    assert!(clipped.contains(&(100.0, 20.0)));

    // larger than the clip box in all directions
    let clipped = clip.clip_ring(&square(-1000.0, -1000.0, 1000.0, 1000.0));
    assert_eq!(clipped.len(), 4);
    for corner in &square(0.0, 0.0, 256.0, 256.0) {
        assert!(clipped.contains(corner));
    }
}

#[test]
fn test_diagonal() {
    let clip = ClipBox::new(100, 0);
    let triangle = vec![(50.0, 50.0), (150.0, 50.0), (50.0, 150.0)];
    let clipped = clip.clip_ring(&triangle);
    assert_eq!(clipped.len(), 5);
    assert!(clipped.contains(&(100.0, 50.0)));
    assert!(clipped.contains(&(50.0, 100.0)));
    assert!(clipped.contains(&(100.0, 100.0)));
}
