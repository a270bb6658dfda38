//! The play state around a laid out maze: which bodies exist, how the ball is steered and what
//! happens when it reaches the goal. Physics stepping itself belongs to the host engine; it
//! reports collisions here and reads back velocities, gravity and which bodies are static.

use log::info;

use crate::layout::{Circle, Point, Rect, SceneLayout};

/// Velocity change per key press.
pub const STEER_IMPULSE: f64 = 5.0;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum BodyLabel {
    /// A wall between two maze cells. Released when the game is won.
    Wall,
    /// The frame around the maze. Always static.
    Boundary,
    Goal,
    Ball,
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub enum Shape {
    Rect(Rect),
    Circle(Circle),
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Body {
    pub label: BodyLabel,
    pub shape: Shape,
    pub is_static: bool,
    pub velocity: Point,
}

impl Body {
    fn fixed(label: BodyLabel, rect: Rect) -> Body {
        Body {
            label,
            shape: Shape::Rect(rect),
            is_static: true,
            velocity: Point::new(0.0, 0.0),
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Steer {
    Up,
    Down,
    Left,
    Right,
}

impl Steer {
    /// W, A, S and D, by DOM style key code.
    pub fn from_key_code(code: &str) -> Option<Steer> {
        match code {
            "KeyW" => Some(Steer::Up),
            "KeyS" => Some(Steer::Down),
            "KeyA" => Some(Steer::Left),
            "KeyD" => Some(Steer::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    bodies: Vec<Body>,
    ball_index: usize,
    gravity: Point,
    won: bool,
}

impl Scene {
    /// Boundary, maze walls, goal and ball, in that order. Gravity starts switched off.
    pub fn new(layout: &SceneLayout) -> Scene {
        let mut bodies: Vec<Body> = layout.boundary
            .iter()
            .map(|&rect| Body::fixed(BodyLabel::Boundary, rect))
            .collect();
        bodies.extend(layout.walls.iter().map(|wall| Body::fixed(BodyLabel::Wall, wall.rect)));
        bodies.push(Body::fixed(BodyLabel::Goal, layout.goal));

        let ball_index = bodies.len();
        bodies.push(Body {
            label: BodyLabel::Ball,
            shape: Shape::Circle(layout.ball),
            is_static: false,
            velocity: Point::new(0.0, 0.0),
        });

        Scene {
            bodies,
            ball_index,
            gravity: Point::new(0.0, 0.0),
            won: false,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn ball(&self) -> &Body {
        &self.bodies[self.ball_index]
    }

    pub fn gravity(&self) -> Point {
        self.gravity
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Nudge the ball's velocity. Up is towards smaller y.
    pub fn steer(&mut self, steer: Steer) {
        let velocity = &mut self.bodies[self.ball_index].velocity;
        match steer {
            Steer::Up => velocity.y -= STEER_IMPULSE,
            Steer::Down => velocity.y += STEER_IMPULSE,
            Steer::Left => velocity.x -= STEER_IMPULSE,
            Steer::Right => velocity.x += STEER_IMPULSE,
        }
    }

    /// Report the start of a collision between two bodies, in either order.
    ///
    /// Ball meeting goal wins the game: gravity is switched on and every maze wall stops being
    /// static so the maze falls apart. Returns true only for the collision that won.
    pub fn collision_start(&mut self, a: BodyLabel, b: BodyLabel) -> bool {
        let is_ball_and_goal = match (a, b) {
            (BodyLabel::Ball, BodyLabel::Goal) | (BodyLabel::Goal, BodyLabel::Ball) => true,
            _ => false,
        };
        if !is_ball_and_goal || self.won {
            return false;
        }

        self.won = true;
        self.gravity = Point::new(0.0, 1.0);
        for body in self.bodies.iter_mut().filter(|b| b.label == BodyLabel::Wall) {
            body.is_static = false;
        }
        info!("ball reached the goal, releasing the walls");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate;
    use crate::layout::{CellSize, LayoutOptions};

    fn scene() -> Scene {
        let maze = generate(4, 5, Some(12)).unwrap();
        let layout = SceneLayout::build(&maze,
                                        CellSize::new(20.0, 20.0).unwrap(),
                                        &LayoutOptions::default());
        Scene::new(&layout)
    }

    fn count(scene: &Scene, label: BodyLabel) -> usize {
        scene.bodies().iter().filter(|b| b.label == label).count()
    }

    #[test]
    fn bodies_from_layout() {
        let s = scene();
        let interior_edges = 4 * 4 + 3 * 5;
        assert_eq!(count(&s, BodyLabel::Boundary), 4);
        assert_eq!(count(&s, BodyLabel::Wall), interior_edges - (4 * 5 - 1));
        assert_eq!(count(&s, BodyLabel::Goal), 1);
        assert_eq!(count(&s, BodyLabel::Ball), 1);
        assert!(!s.ball().is_static);
        assert!(s.bodies().iter().filter(|b| b.label != BodyLabel::Ball).all(|b| b.is_static));
        assert_eq!(s.gravity(), Point::new(0.0, 0.0));
    }

    #[test]
    fn steering_adds_impulses() {
        let mut s = scene();
        s.steer(Steer::Right);
        s.steer(Steer::Right);
        s.steer(Steer::Up);
        assert_eq!(s.ball().velocity, Point::new(10.0, -5.0));
        s.steer(Steer::Left);
        s.steer(Steer::Down);
        assert_eq!(s.ball().velocity, Point::new(5.0, 0.0));
    }

    #[test]
    fn key_codes() {
        assert_eq!(Steer::from_key_code("KeyW"), Some(Steer::Up));
        assert_eq!(Steer::from_key_code("KeyA"), Some(Steer::Left));
        assert_eq!(Steer::from_key_code("KeyS"), Some(Steer::Down));
        assert_eq!(Steer::from_key_code("KeyD"), Some(Steer::Right));
        assert_eq!(Steer::from_key_code("ArrowUp"), None);
    }

    #[test]
    fn other_collisions_do_nothing() {
        let mut s = scene();
        assert!(!s.collision_start(BodyLabel::Ball, BodyLabel::Wall));
        assert!(!s.collision_start(BodyLabel::Ball, BodyLabel::Boundary));
        assert!(!s.collision_start(BodyLabel::Goal, BodyLabel::Wall));
        assert!(!s.is_won());
        assert!(s.bodies().iter().filter(|b| b.label == BodyLabel::Wall).all(|b| b.is_static));
    }

    #[test]
    fn reaching_the_goal_releases_only_maze_walls() {
        let mut s = scene();
        assert!(s.collision_start(BodyLabel::Goal, BodyLabel::Ball));
        assert!(s.is_won());
        assert_eq!(s.gravity(), Point::new(0.0, 1.0));
        for body in s.bodies() {
            match body.label {
                BodyLabel::Wall | BodyLabel::Ball => assert!(!body.is_static),
                BodyLabel::Boundary | BodyLabel::Goal => assert!(body.is_static),
            }
        }

        // already won
        assert!(!s.collision_start(BodyLabel::Ball, BodyLabel::Goal));
    }
}
