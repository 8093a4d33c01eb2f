mod common;

use common::{approx, approx_floats, hero_scene};
use lupine_animation_core::{
    presets, Animation, AnimationPlayer, Config, PlayerEvent, Track, Value,
};

fn fade_and_spin() -> AnimationPlayer {
    let mut player = AnimationPlayer::new(Config::default());
    player.add_animation(
        Animation::new("fade").with_track(
            Track::property("Hero", "opacity").with_key(0.0, 1.0).with_key(2.0, 0.0),
        ),
    );
    player.add_animation(
        Animation::new("spin")
            .with_loop(true)
            .with_track(
                Track::transform("Hero", "rotation").with_key(0.0, 0.0).with_key(1.0, 360.0),
            ),
    );
    player
}

fn started(name: &str) -> PlayerEvent {
    PlayerEvent::Started {
        animation: name.to_string(),
    }
}

fn changed(name: &str) -> PlayerEvent {
    PlayerEvent::Changed {
        animation: name.to_string(),
    }
}

#[test]
fn empty_name_plays_the_default() {
    let mut player = fade_and_spin();
    assert!(player.play("", 0.0));
    assert_eq!(player.current_animation_name(), Some("fade"));
    assert!(player.is_playing());
    assert_eq!(player.drain_events(), vec![started("fade"), changed("fade")]);
}

#[test]
fn unknown_name_is_a_no_op() {
    let mut player = fade_and_spin();
    player.play("spin", 0.0);
    player.drain_events();

    assert!(!player.play("jump", 0.0));
    assert_eq!(player.current_animation_name(), Some("spin"));
    assert!(player.drain_events().is_empty());

    let mut empty = AnimationPlayer::default();
    assert!(!empty.play("", 0.0));
}

#[test]
fn switching_stops_the_previous_animation() {
    let mut player = fade_and_spin();
    let mut root = hero_scene();
    player.play("fade", 0.0);
    player.process(0.5, &mut root);

    player.play("spin", 0.0);
    let fade = player.animation("fade").unwrap();
    assert!(!fade.is_playing());
    assert_eq!(fade.current_time(), 0.0);
    assert_eq!(player.current_animation_name(), Some("spin"));
}

#[test]
fn process_advances_and_applies() {
    let mut player = fade_and_spin();
    let mut root = hero_scene();
    player.play("fade", 0.0);

    let report = player.process(0.5, &mut root);
    assert_eq!(report.applied, 1);
    approx(player.current_position(), 0.5, 1e-6);
    approx(root.prop_at("Hero", "opacity").unwrap().as_f32().unwrap(), 0.75, 1e-5);
    assert_eq!(player.current_length(), 2.0);
}

#[test]
fn playback_speed_is_applied_once() {
    let mut player = AnimationPlayer::new(Config {
        playback_speed: 2.0,
        ..Config::default()
    });
    player.add_animation(
        Animation::new("slide").with_track(
            Track::property("Hero", "opacity").with_key(0.0, 0.0).with_key(10.0, 1.0),
        ),
    );
    player.play("slide", 0.0);
    assert_eq!(player.current_animation().unwrap().speed_scale, 2.0);

    let mut root = hero_scene();
    player.process(1.0, &mut root);
    // 1s at 2x, not 4x
    approx(player.current_position(), 2.0, 1e-6);

    player.set_playback_speed(0.5);
    player.process(1.0, &mut root);
    approx(player.current_position(), 2.5, 1e-6);
}

#[test]
fn finish_is_reported_once_and_processing_stops() {
    let mut player = fade_and_spin();
    let mut root = hero_scene();
    player.play("fade", 0.0);
    player.drain_events();

    player.process(1.5, &mut root);
    player.process(1.5, &mut root);
    assert_eq!(
        player.drain_events(),
        vec![PlayerEvent::Finished {
            animation: "fade".into()
        }]
    );
    assert!(!player.is_playing());
    // the final frame is still written
    approx(root.prop_at("Hero", "opacity").unwrap().as_f32().unwrap(), 0.0, 1e-6);

    let report = player.process(1.0, &mut root);
    assert_eq!(report.total(), 0);
    assert!(player.drain_events().is_empty());
}

#[test]
fn loops_are_mirrored() {
    let mut player = fade_and_spin();
    let mut root = hero_scene();
    player.play("spin", 0.0);
    player.drain_events();

    player.process(1.25, &mut root);
    player.process(1.0, &mut root);
    let events = player.drain_events();
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|e| matches!(e, PlayerEvent::Looped { animation } if animation == "spin")));
    approx(player.current_position(), 0.25, 1e-5);
}

#[test]
fn pause_resume_seek_and_stop() {
    let mut player = fade_and_spin();
    let mut root = hero_scene();
    player.play("fade", 0.0);

    player.pause();
    assert!(!player.is_playing());
    player.process(1.0, &mut root);
    assert_eq!(player.current_position(), 0.0);

    player.resume();
    player.seek(1.5);
    player.process(0.25, &mut root);
    approx(player.current_position(), 1.75, 1e-6);

    player.stop();
    assert_eq!(player.current_animation_name(), None);
    assert_eq!(player.current_position(), 0.0);
    assert_eq!(player.current_length(), 0.0);
    assert!(!player.animation("fade").unwrap().is_playing());
}

#[test]
fn removing_the_current_animation_stops_it_first() {
    let mut player = fade_and_spin();
    player.play("spin", 0.0);
    let removed = player.remove_animation("spin").expect("spin present");
    assert!(!removed.is_playing());
    assert_eq!(player.current_animation_name(), None);
    assert_eq!(player.animation_names(), vec!["fade"]);
    assert!(!player.has_animation("spin"));
}

#[test]
fn ready_starts_autoplay() {
    let mut player = AnimationPlayer::new(Config {
        autoplay_animation: Some("pulse".into()),
        ..Config::default()
    });
    player.add_animation(presets::pulse("pulse", "Hero/Sprite", 0.3, 1.0, 1.0));
    player.ready().unwrap();
    assert_eq!(player.current_animation_name(), Some("pulse"));

    let mut root = hero_scene();
    player.process(0.5, &mut root);
    approx_floats(
        root.prop_at("Hero/Sprite", "modulate").unwrap(),
        &[1.0, 1.0, 1.0, 0.3],
        1e-5,
    );
}

#[test]
fn ready_without_matching_autoplay_stays_idle() {
    let mut player = AnimationPlayer::new(Config {
        autoplay_animation: Some("missing".into()),
        animation_file: Some("/nonexistent/lupine/anims.json".into()),
        ..Config::default()
    });
    player.ready().unwrap();
    assert!(!player.is_playing());
}

#[test]
fn event_queue_is_bounded() {
    let mut player = AnimationPlayer::new(Config {
        max_events: 3,
        ..Config::default()
    });
    player.add_animation(Animation::new("a"));
    player.add_animation(Animation::new("b"));
    player.play("a", 0.0);
    player.play("b", 0.0);
    // oldest (started a) dropped
    assert_eq!(
        player.drain_events(),
        vec![changed("a"), started("b"), changed("b")]
    );
}

#[test]
fn settings_round_trip_through_json() {
    let mut player = fade_and_spin();
    player.set_playback_speed(1.5);
    player.set_autoplay_animation(Some("spin".into()));
    let json = player.to_json().unwrap();

    let restored = AnimationPlayer::from_json(&json).unwrap();
    assert_eq!(restored.playback_speed(), 1.5);
    assert_eq!(restored.config().autoplay_animation.as_deref(), Some("spin"));
    assert_eq!(restored.animation_names(), vec!["fade", "spin"]);
    assert_eq!(restored.library(), player.library());
    assert_eq!(restored.current_animation_name(), None);
}

#[test]
fn legacy_player_settings_with_empty_strings() {
    let json = r#"{
        "name": "AnimationPlayer",
        "autoplay_animation": "",
        "playback_speed": 1.0,
        "animation_file": ""
    }"#;
    let player = AnimationPlayer::from_json(json).unwrap();
    assert!(player.config().autoplay_animation.is_none());
    assert!(player.config().animation_file.is_none());
    assert!(player.library().is_empty());
}

#[test]
fn string_values_track_through_player() {
    let mut player = AnimationPlayer::default();
    player.add_animation(
        Animation::new("label").with_track(
            Track::property("Hero", "state").with_key(0.0, "idle").with_key(1.0, "run"),
        ),
    );
    let mut root = hero_scene();
    if let Some(hero) = root.children.iter_mut().find(|c| c.name == "Hero") {
        hero.props.insert("state".into(), Value::text(""));
    }
    player.play("label", 0.0);
    player.process(0.75, &mut root);
    assert_eq!(root.prop_at("Hero", "state"), Some(&Value::text("run")));
}
