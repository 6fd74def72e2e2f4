use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use swipe_card_view::core::{ScriptedJitter, SwipeDirection};
use swipe_card_view::{Card, CardObserver, CardOptions, CardPhase, CardStage, DragSample};

const SCREEN: Vec2 = Vec2::new(400.0, 800.0);

#[derive(Default)]
struct SwipeLog {
    swipes: RefCell<Vec<(usize, SwipeDirection)>>,
    returned: RefCell<Vec<usize>>,
}

impl CardObserver for SwipeLog {
    fn on_swiped_left(&self, card: &Card) {
        self.swipes
            .borrow_mut()
            .push((card.index(), SwipeDirection::Left));
    }

    fn on_swiped_right(&self, card: &Card) {
        self.swipes
            .borrow_mut()
            .push((card.index(), SwipeDirection::Right));
    }

    fn on_returned_to_original(&self, card: &Card) {
        self.returned.borrow_mut().push(card.index());
    }
}

fn options() -> CardOptions {
    CardOptions {
        swipe_x_pos_limit_ratio: 0.25,
        swipe_y_pos_limit_ratio: 0.25,
        ..CardOptions::default()
    }
}

fn new_card(log: &Rc<SwipeLog>) -> Card {
    let mut jitter = ScriptedJitter::new([0, 0, 0, 0, -300, 0]);
    let mut card = Card::new(&options(), SCREEN, &mut jitter);
    card.set_observer(log);
    card
}

fn run_frames(stage: &mut CardStage, seconds: f32) -> Vec<usize> {
    let mut removed = Vec::new();
    let frames = (seconds * 60.0).ceil() as usize;
    for _ in 0..frames {
        removed.extend(stage.advance(1.0 / 60.0));
    }
    removed
}

fn swipe_top(stage: &mut CardStage, translation: Vec2) {
    let card = stage.top_mut().expect("oberste Karte");
    card.handle_drag(DragSample::began(Vec2::ZERO));
    card.handle_drag(DragSample::changed(translation));
    card.handle_drag(DragSample::ended(translation, Vec2::ZERO));
}

#[test]
fn test_full_deck_is_swiped_away_in_order() {
    let log = Rc::new(SwipeLog::default());
    let mut stage = CardStage::new();
    for _ in 0..3 {
        stage.attach(new_card(&log));
    }
    run_frames(&mut stage, 1.0);

    swipe_top(&mut stage, Vec2::new(-240.0, 240.0));
    swipe_top(&mut stage, Vec2::new(240.0, -240.0));
    swipe_top(&mut stage, Vec2::new(-240.0, -240.0));
    assert!(stage.top().is_none());

    // Alle drei enden im selben Frame, gemeldet wird unten → oben
    let removed = run_frames(&mut stage, 1.0);

    assert_eq!(removed, vec![0, 1, 2]);
    assert!(stage.is_empty());
    assert_eq!(
        *log.swipes.borrow(),
        vec![
            (0, SwipeDirection::Left),
            (1, SwipeDirection::Right),
            (2, SwipeDirection::Left),
        ]
    );
}

#[test]
fn test_release_example_snaps_back_without_swipe() {
    // 400×800, Verschiebung (-160, 80): x-Verhältnis -0.4, y-Verhältnis 0.1
    let log = Rc::new(SwipeLog::default());
    let mut stage = CardStage::new();
    stage.attach(new_card(&log));
    run_frames(&mut stage, 1.0);
    let resting = *stage.top().expect("Karte").resting_pose();

    swipe_top(&mut stage, Vec2::new(-160.0, 80.0));
    run_frames(&mut stage, 1.0);

    let card = stage.top().expect("Karte bleibt eingehängt");
    assert_eq!(card.phase(), CardPhase::Idle);
    assert_eq!(card.pose().center, resting.center);
    assert_eq!(*log.returned.borrow(), vec![0]);
    assert!(log.swipes.borrow().is_empty());
}

#[test]
fn test_observer_dropped_mid_dismiss_is_not_called() {
    let log = Rc::new(SwipeLog::default());
    let mut stage = CardStage::new();
    stage.attach(new_card(&log));
    run_frames(&mut stage, 1.0);

    swipe_top(&mut stage, Vec2::new(300.0, 300.0));
    let weak = Rc::downgrade(&log);
    drop(log);

    let removed = run_frames(&mut stage, 1.0);

    assert!(weak.upgrade().is_none());
    assert_eq!(removed, vec![0]);
}

#[test]
fn test_resize_changes_ratio_for_next_drag() {
    let log = Rc::new(SwipeLog::default());
    let mut stage = CardStage::new();
    stage.attach(new_card(&log));
    run_frames(&mut stage, 1.0);

    // Auf doppelter Breite reicht dieselbe Verschiebung nicht mehr
    stage.set_screen_size(SCREEN * 2.0);
    swipe_top(&mut stage, Vec2::new(150.0, 500.0));
    run_frames(&mut stage, 1.0);

    assert!(log.swipes.borrow().is_empty());
    assert_eq!(*log.returned.borrow(), vec![0]);
}
