use lupine_animation_core::{Animation, AnimationError, AnimationLibrary, Track};

fn anim(name: &str) -> Animation {
    Animation::new(name).with_track(Track::property("Hero", "opacity").with_key(0.0, 1.0))
}

#[test]
fn first_entry_becomes_default_and_removal_promotes_next() {
    let mut lib = AnimationLibrary::new();
    lib.add_animation(anim("A"));
    lib.add_animation(anim("B"));
    assert_eq!(lib.default_animation(), Some("A"));

    let removed = lib.remove_animation("A").expect("A present");
    assert_eq!(removed.name, "A");
    assert_eq!(lib.default_animation(), Some("B"));

    lib.remove_animation("B");
    assert_eq!(lib.default_animation(), None);
    assert!(lib.is_empty());
}

#[test]
fn removal_promotes_in_insertion_order() {
    let mut lib = AnimationLibrary::new();
    for name in ["zeta", "alpha", "mid", "beta"] {
        lib.add_animation(anim(name));
    }
    lib.remove_animation("alpha");
    assert_eq!(lib.names(), vec!["zeta", "mid", "beta"]);

    lib.remove_animation("zeta");
    assert_eq!(lib.default_animation(), Some("mid"));
}

#[test]
fn removing_a_non_default_keeps_the_default() {
    let mut lib = AnimationLibrary::new();
    lib.add_animation(anim("A"));
    lib.add_animation(anim("B"));
    lib.remove_animation("B");
    assert_eq!(lib.default_animation(), Some("A"));
    assert!(lib.remove_animation("B").is_none());
}

#[test]
fn same_name_overwrites_in_place() {
    let mut lib = AnimationLibrary::new();
    lib.add_animation(anim("A"));
    lib.add_animation(anim("B"));
    lib.add_animation(Animation::new("A").with_loop(true));

    assert_eq!(lib.len(), 2);
    assert_eq!(lib.names(), vec!["A", "B"]);
    assert!(lib.get("A").unwrap().looping);
}

#[test]
fn autoplay_entry_claims_default() {
    let mut lib = AnimationLibrary::new();
    lib.add_animation(anim("idle"));
    lib.add_animation(anim("intro").with_autoplay(true));
    assert_eq!(lib.default_animation(), Some("intro"));
}

#[test]
fn set_default_and_clear() {
    let mut lib = AnimationLibrary::new();
    lib.add_animation(anim("A"));
    lib.add_animation(anim("B"));

    lib.set_default("B").unwrap();
    assert_eq!(lib.default_animation(), Some("B"));
    assert!(matches!(
        lib.set_default("C"),
        Err(AnimationError::AnimationNotFound { .. })
    ));

    assert!(lib.contains("A"));
    lib.get_mut("A").unwrap().speed_scale = 2.0;
    assert_eq!(lib.get("A").unwrap().speed_scale, 2.0);

    let names: Vec<&str> = lib.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["A", "B"]);

    lib.clear();
    assert!(lib.is_empty());
    assert_eq!(lib.default_animation(), None);
}
