use super::*;
use crate::core::jitter::ScriptedJitter;
use approx::assert_relative_eq;
use std::cell::RefCell;

const SCREEN: Vec2 = Vec2::new(400.0, 800.0);

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Began(usize),
    Position(usize, f32, f32),
    Left(usize),
    Right(usize),
    Returned(usize),
}

#[derive(Default)]
struct Recorder {
    events: RefCell<Vec<Event>>,
}

impl Recorder {
    fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| pred(e)).count()
    }
}

impl CardObserver for Recorder {
    fn on_drag_began(&self, card: &Card) {
        self.events.borrow_mut().push(Event::Began(card.index()));
    }

    fn on_position_changed(&self, card: &Card, center_x: f32, center_y: f32) {
        self.events
            .borrow_mut()
            .push(Event::Position(card.index(), center_x, center_y));
    }

    fn on_swiped_left(&self, card: &Card) {
        self.events.borrow_mut().push(Event::Left(card.index()));
    }

    fn on_swiped_right(&self, card: &Card) {
        self.events.borrow_mut().push(Event::Right(card.index()));
    }

    fn on_returned_to_original(&self, card: &Card) {
        self.events.borrow_mut().push(Event::Returned(card.index()));
    }
}

fn options() -> CardOptions {
    CardOptions {
        swipe_x_pos_limit_ratio: 0.25,
        swipe_y_pos_limit_ratio: 0.25,
        ..CardOptions::default()
    }
}

fn settle(card: &mut Card) {
    for _ in 0..240 {
        card.advance(1.0 / 60.0);
    }
}

/// Karte mit fester Ruhepose: Mittelpunkt (204, 398), Rotation 1° (4° × 0.25).
fn idle_card(recorder: &Rc<Recorder>) -> Card {
    let mut jitter = ScriptedJitter::new([4, -2, 4, 100, -400, 45]);
    let mut card = Card::new(&options(), SCREEN, &mut jitter);
    card.set_index(7);
    card.set_observer(recorder);
    settle(&mut card);
    card
}

fn drag(card: &mut Card, translation: Vec2) {
    card.handle_drag(DragSample::began(Vec2::ZERO));
    card.handle_drag(DragSample::changed(translation));
}

#[test]
fn test_entrance_starts_off_screen_and_settles_in_resting_pose() {
    let mut jitter = ScriptedJitter::new([4, -2, 4, 100, 400, 45]);
    let mut card = Card::new(&options(), SCREEN, &mut jitter);

    assert_eq!(card.phase(), CardPhase::Entering);
    assert_eq!(card.pose().center, Vec2::new(100.0, -400.0));
    assert_eq!(card.pose().alpha, 0.0);

    settle(&mut card);
    assert_eq!(card.phase(), CardPhase::Idle);
    assert_eq!(card.pose(), card.resting_pose());
    assert_eq!(card.resting_pose().center, Vec2::new(204.0, 398.0));
    assert_relative_eq!(card.resting_pose().transform.rotation, 1f32.to_radians());
}

#[test]
fn test_drag_began_notifies_and_fades_alpha() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);

    card.handle_drag(DragSample::began(Vec2::new(3.0, 1.0)));
    assert_eq!(card.phase(), CardPhase::Dragging);
    assert_eq!(recorder.events(), vec![Event::Began(7)]);
    assert_eq!(card.tracker().original_point, Vec2::new(201.0, 397.0));

    settle(&mut card);
    assert_relative_eq!(card.pose().alpha, card.options().start_dragging_alpha);
}

#[test]
fn test_drag_move_tracks_input_and_tilts() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);

    drag(&mut card, Vec2::new(100.0, 40.0));

    assert_eq!(card.pose().center, Vec2::new(304.0, 438.0));
    assert_eq!(
        recorder.events().last(),
        Some(&Event::Position(7, 304.0, 438.0))
    );
    assert_relative_eq!(card.tracker().ratio.x, 0.25);
    assert_relative_eq!(card.tracker().ratio.y, 0.05);
    assert_relative_eq!(
        card.pose().transform.rotation,
        1f32.to_radians() + PI / 10.0 * 0.25
    );
    assert_relative_eq!(
        card.pose().transform.scale,
        card.options().max_scale_of_dragging
    );
}

#[test]
fn test_tilt_ignores_vertical_displacement() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);

    drag(&mut card, Vec2::new(-80.0, 0.0));
    let flat = card.pose().transform.rotation;
    card.handle_drag(DragSample::changed(Vec2::new(-80.0, 500.0)));
    assert_relative_eq!(card.pose().transform.rotation, flat);
}

#[test]
fn test_tilt_is_bounded_for_huge_translation() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);

    drag(&mut card, Vec2::new(1.0e9, -1.0e9));
    assert_eq!(card.tracker().ratio, Vec2::new(1.0, -1.0));
    assert_relative_eq!(
        card.pose().transform.rotation,
        1f32.to_radians() + PI / 10.0
    );
}

#[test]
fn test_horizontal_only_release_snaps_back_to_exact_resting_pose() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);
    let resting = *card.resting_pose();

    // x-Verhältnis -0.4, y-Verhältnis 0.1 → y-Bedingung verfehlt
    drag(&mut card, Vec2::new(-160.0, 80.0));
    card.handle_drag(DragSample::ended(Vec2::new(-160.0, 80.0), Vec2::new(-2000.0, 0.0)));

    assert_eq!(card.phase(), CardPhase::Returning);
    assert!(card.tracker().is_reset());
    assert_eq!(recorder.events().last(), Some(&Event::Returned(7)));

    settle(&mut card);
    assert_eq!(card.phase(), CardPhase::Idle);
    assert_eq!(card.pose().center, resting.center);
    assert_eq!(card.pose().transform, resting.transform);
    assert_relative_eq!(card.pose().alpha, card.options().stop_dragging_alpha);
    assert_eq!(recorder.count(|e| matches!(e, Event::Left(_) | Event::Right(_))), 0);
}

#[test]
fn test_dismiss_left_targets_off_screen_and_detaches_once() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);

    drag(&mut card, Vec2::new(-200.0, 300.0));
    card.handle_drag(DragSample::ended(Vec2::new(-200.0, 300.0), Vec2::new(-900.0, 123.5)));

    assert_eq!(card.phase(), CardPhase::Dismissing);
    assert!(card.tracker().is_reset());

    settle(&mut card);
    assert!(card.is_detached());
    assert_eq!(card.pose().center, Vec2::new(-1.6 * SCREEN.x, 123.5));
    assert_eq!(recorder.count(|e| matches!(e, Event::Left(7))), 1);
    assert_eq!(recorder.count(|e| matches!(e, Event::Right(_))), 0);

    settle(&mut card);
    assert_eq!(recorder.count(|e| matches!(e, Event::Left(_))), 1);
}

#[test]
fn test_dismiss_right_uses_positive_distance() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);

    drag(&mut card, Vec2::new(150.0, -250.0));
    card.handle_drag(DragSample::ended(Vec2::new(150.0, -250.0), Vec2::new(40.0, -777.0)));
    settle(&mut card);

    assert!(card.is_detached());
    assert_eq!(card.pose().center, Vec2::new(1.6 * SCREEN.x, -777.0));
    assert_eq!(recorder.count(|e| matches!(e, Event::Right(7))), 1);
    assert_eq!(recorder.count(|e| matches!(e, Event::Left(_))), 0);
}

#[test]
fn test_cancelled_drag_is_evaluated_like_ended() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);

    drag(&mut card, Vec2::new(-200.0, 300.0));
    card.handle_drag(DragSample::cancelled(Vec2::new(-200.0, 300.0), Vec2::ZERO));
    assert_eq!(card.phase(), CardPhase::Dismissing);
}

#[test]
fn test_drag_is_ignored_while_dismissing_and_after_detach() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);

    drag(&mut card, Vec2::new(200.0, 300.0));
    card.handle_drag(DragSample::ended(Vec2::new(200.0, 300.0), Vec2::ZERO));
    let began_before = recorder.count(|e| matches!(e, Event::Began(_)));

    card.handle_drag(DragSample::began(Vec2::ZERO));
    card.handle_drag(DragSample::changed(Vec2::new(5.0, 5.0)));
    assert_eq!(card.phase(), CardPhase::Dismissing);

    settle(&mut card);
    card.handle_drag(DragSample::began(Vec2::ZERO));
    assert!(card.is_detached());
    assert_eq!(recorder.count(|e| matches!(e, Event::Began(_))), began_before);
}

#[test]
fn test_scratch_state_is_reset_before_next_drag() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);

    drag(&mut card, Vec2::new(30.0, 30.0));
    card.handle_drag(DragSample::ended(Vec2::new(30.0, 30.0), Vec2::ZERO));
    assert!(card.tracker().is_reset());

    // neuer Drag während des Rückfederns übernimmt die Pose
    card.advance(0.05);
    let center = card.pose().center;
    card.handle_drag(DragSample::began(Vec2::ZERO));
    assert_eq!(card.tracker().original_point, center);
    assert_eq!(card.tracker().ratio, Vec2::ZERO);
}

#[test]
fn test_drag_during_entrance_survives_entrance_completion() {
    let recorder = Rc::new(Recorder::default());
    let mut jitter = ScriptedJitter::new([4, -2, 4, 100, -400, 45]);
    let mut card = Card::new(&options(), SCREEN, &mut jitter);
    card.set_observer(&recorder);

    card.advance(0.1);
    assert_eq!(card.phase(), CardPhase::Entering);
    card.handle_drag(DragSample::began(Vec2::ZERO));
    assert_eq!(card.phase(), CardPhase::Dragging);

    // Einflug läuft für Mittelpunkt und Transform zu Ende
    settle(&mut card);
    assert_eq!(card.phase(), CardPhase::Dragging);

    let translation = Vec2::new(40.0, 20.0);
    card.handle_drag(DragSample::changed(translation));
    assert_eq!(card.pose().center, card.tracker().original_point + translation);
    assert_eq!(recorder.count(|e| matches!(e, Event::Position(..))), 1);
}

#[test]
fn test_drag_during_snap_back_survives_spring_completion() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);

    drag(&mut card, Vec2::new(30.0, 30.0));
    card.handle_drag(DragSample::ended(Vec2::new(30.0, 30.0), Vec2::ZERO));
    assert_eq!(card.phase(), CardPhase::Returning);

    card.advance(0.05);
    card.handle_drag(DragSample::began(Vec2::ZERO));
    settle(&mut card);
    assert_eq!(card.phase(), CardPhase::Dragging);

    let before = card.pose().center;
    let translation = Vec2::new(-20.0, 10.0);
    card.handle_drag(DragSample::changed(translation));
    assert_ne!(card.pose().center, before);
    assert_eq!(card.pose().center, card.tracker().original_point + translation);
}

#[test]
fn test_cleared_observer_receives_nothing() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);
    card.clear_observer();

    drag(&mut card, Vec2::new(-300.0, 300.0));
    card.handle_drag(DragSample::ended(Vec2::ZERO, Vec2::ZERO));
    settle(&mut card);

    assert!(card.is_detached());
    assert!(recorder.events().is_empty());
    assert_eq!(Rc::weak_count(&recorder), 0);
}

#[test]
fn test_snap_back_alpha_never_exceeds_one() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);

    drag(&mut card, Vec2::new(30.0, 30.0));
    settle(&mut card);
    card.handle_drag(DragSample::ended(Vec2::new(30.0, 30.0), Vec2::ZERO));
    for _ in 0..120 {
        card.advance(1.0 / 240.0);
        assert!((0.0..=1.0).contains(&card.pose().alpha));
    }
    assert_eq!(card.pose().alpha, 1.0);
}

#[test]
fn test_works_without_observer_and_with_dropped_observer() {
    let mut jitter = ScriptedJitter::default();
    let mut card = Card::new(&options(), SCREEN, &mut jitter);
    settle(&mut card);
    drag(&mut card, Vec2::new(-200.0, 300.0));
    card.handle_drag(DragSample::ended(Vec2::ZERO, Vec2::ZERO));
    settle(&mut card);
    assert!(card.is_detached());

    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);
    drop(recorder);
    drag(&mut card, Vec2::new(10.0, 10.0));
    card.handle_drag(DragSample::ended(Vec2::ZERO, Vec2::ZERO));
    settle(&mut card);
    assert_eq!(card.phase(), CardPhase::Idle);
}

#[test]
fn test_card_does_not_keep_observer_alive() {
    let recorder = Rc::new(Recorder::default());
    let _card = idle_card(&recorder);
    assert_eq!(Rc::strong_count(&recorder), 1);
    assert_eq!(Rc::weak_count(&recorder), 1);
}

#[test]
fn test_non_finite_samples_do_not_poison_pose() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);

    card.handle_drag(DragSample::began(Vec2::ZERO));
    card.handle_drag(DragSample::changed(Vec2::new(f32::NAN, f32::INFINITY)));
    assert!(card.pose().center.is_finite());
    assert!(card.pose().transform.rotation.is_finite());
}

#[test]
fn test_read_more_action_runs_and_stays_registered() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);
    assert!(!card.tap_read_more());

    let taps = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&taps);
    card.set_read_more_action(move |card| sink.borrow_mut().push(card.index()));

    assert!(card.tap_read_more());
    assert!(card.tap_read_more());
    assert_eq!(*taps.borrow(), vec![7, 7]);
}

#[test]
fn test_read_more_area_is_bottom_right_corner() {
    let mut jitter = ScriptedJitter::new([0, 0, 0, 0, 300, 0]);
    let mut card = Card::new(&options(), SCREEN, &mut jitter);
    settle(&mut card);

    let center = card.pose().center;
    let half = card.options().card_size() * 0.5;
    assert!(card.read_more_contains(center + half - Vec2::splat(5.0)));
    assert!(!card.read_more_contains(center));
    assert!(!card.read_more_contains(center + half + Vec2::splat(5.0)));
}

#[test]
fn test_bind_content_populates_fields() {
    let recorder = Rc::new(Recorder::default());
    let mut card = idle_card(&recorder);
    card.bind_content(&RecipeRecord {
        recipe_title: "Oyakodon".into(),
        recipe_publishday: "2018/02/04".into(),
        recipe_cost: "300円前後".into(),
        recipe_indication: "約15分".into(),
        food_image_url: "kein bild".into(),
        recipe_description: "Huhn und Ei.".into(),
    });
    assert_eq!(card.content().title, "Oyakodon");
    assert_eq!(card.content().date_line, "2018/02/04 : 300円前後");
    assert!(card.content().image.is_none());
}
