//! Sensor-driven robot simulation.
//!
//! A [`Robot`] is a finite-state agent whose behavior is decoded from a
//! binary chromosome: a lookup table maps each 6-bit wall pattern around
//! the robot to one of four actions. One robot is built per fitness
//! evaluation, runs a bounded simulation, and is discarded after its route
//! is scored.

use super::grid::{Cell, Maze};

/// Number of distinct sensor readings (2^6 wall patterns).
pub const SENSOR_STATES: usize = 64;

/// Genes required to encode an action table: two bits per sensor state.
pub const CHROMOSOME_LENGTH: usize = 2 * SENSOR_STATES;

/// Compass heading of the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Heading after a 90 degree clockwise turn.
    pub fn clockwise(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Heading after a 90 degree counterclockwise turn.
    pub fn counter_clockwise(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }
}

/// One decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// End the simulation.
    Stop,
    /// Move one cell in the current heading.
    Forward,
    /// Rotate 90 degrees clockwise.
    TurnClockwise,
    /// Rotate 90 degrees counterclockwise.
    TurnCounterClockwise,
}

impl Action {
    /// Decodes one action from its two chromosome bits (high bit first):
    /// 00 stop, 01 forward, 10 clockwise, 11 counterclockwise.
    fn from_bits(high: bool, low: bool) -> Action {
        match (high, low) {
            (false, false) => Action::Stop,
            (false, true) => Action::Forward,
            (true, false) => Action::TurnClockwise,
            (true, true) => Action::TurnCounterClockwise,
        }
    }
}

/// Mutable state of one maze simulation run.
pub struct Robot<'a> {
    maze: &'a Maze,
    x: i32,
    y: i32,
    heading: Heading,
    actions: [Action; SENSOR_STATES],
    max_moves: usize,
    moves: usize,
    sensor_cache: Option<usize>,
    route: Vec<(i32, i32)>,
}

impl<'a> Robot<'a> {
    /// Decodes a chromosome into an action table and places the robot on
    /// the maze's start cell facing East. The route starts with the start
    /// position.
    ///
    /// # Panics
    /// Panics if the chromosome does not hold exactly
    /// [`CHROMOSOME_LENGTH`] genes.
    pub fn new(chromosome: &[i32], maze: &'a Maze, max_moves: usize) -> Robot<'a> {
        let actions = decode_actions(chromosome);
        let (x, y) = maze.start_position();
        Robot {
            maze,
            x,
            y,
            heading: Heading::East,
            actions,
            max_moves,
            moves: 0,
            sensor_cache: None,
            route: vec![(x, y)],
        }
    }

    /// Runs the simulation to completion.
    ///
    /// Each step reads the sensor-selected action and terminates on
    /// [`Action::Stop`], on standing on the goal cell, or when the move
    /// count exceeds the cap. Hitting the cap is a normal termination path,
    /// the escape hatch against non-terminating controllers.
    pub fn run(&mut self) {
        loop {
            self.moves += 1;

            if self.next_action() == Action::Stop {
                return;
            }
            if self.maze.cell(self.x, self.y) == Cell::Goal {
                return;
            }
            if self.moves > self.max_moves {
                return;
            }

            self.step();
        }
    }

    /// The action selected by the current sensor reading.
    fn next_action(&mut self) -> Action {
        self.actions[self.sensor_value()]
    }

    /// The 6-bit wall pattern around the robot, relative to its heading:
    /// front = 1, front-left = 2, front-right = 4, left = 8, right = 16,
    /// back = 32. Cached until the next executed action.
    fn sensor_value(&mut self) -> usize {
        if let Some(value) = self.sensor_cache {
            return value;
        }

        let (x, y) = (self.x, self.y);
        let probes: [(i32, i32); 6] = match self.heading {
            Heading::North => [
                (x, y - 1),
                (x - 1, y - 1),
                (x + 1, y - 1),
                (x - 1, y),
                (x + 1, y),
                (x, y + 1),
            ],
            Heading::East => [
                (x + 1, y),
                (x + 1, y - 1),
                (x + 1, y + 1),
                (x, y - 1),
                (x, y + 1),
                (x - 1, y),
            ],
            Heading::South => [
                (x, y + 1),
                (x + 1, y + 1),
                (x - 1, y + 1),
                (x + 1, y),
                (x - 1, y),
                (x, y - 1),
            ],
            Heading::West => [
                (x - 1, y),
                (x - 1, y + 1),
                (x - 1, y - 1),
                (x, y + 1),
                (x, y - 1),
                (x + 1, y),
            ],
        };

        let mut value = 0;
        for (bit, &(px, py)) in probes.iter().enumerate() {
            if self.maze.is_wall(px, py) {
                value |= 1 << bit;
            }
        }

        self.sensor_cache = Some(value);
        value
    }

    /// Executes the current action: forward motion is clamped to the grid
    /// and reverted on walls; position changes are recorded in the route.
    fn step(&mut self) {
        match self.next_action() {
            Action::Forward => {
                let (from_x, from_y) = (self.x, self.y);
                match self.heading {
                    Heading::North => self.y = (self.y - 1).max(0),
                    Heading::East => self.x = (self.x + 1).min(self.maze.max_x()),
                    Heading::South => self.y = (self.y + 1).min(self.maze.max_y()),
                    Heading::West => self.x = (self.x - 1).max(0),
                }

                if self.maze.is_wall(self.x, self.y) {
                    self.x = from_x;
                    self.y = from_y;
                } else if (self.x, self.y) != (from_x, from_y) {
                    self.route.push((self.x, self.y));
                }
            }
            Action::TurnClockwise => self.heading = self.heading.clockwise(),
            Action::TurnCounterClockwise => self.heading = self.heading.counter_clockwise(),
            Action::Stop => {}
        }

        self.sensor_cache = None;
    }

    /// Current position.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// The ordered positions visited so far, starting with the start cell.
    pub fn route(&self) -> &[(i32, i32)] {
        &self.route
    }
}

/// Decodes the chromosome's bit pairs into the sensor-indexed action table.
fn decode_actions(chromosome: &[i32]) -> [Action; SENSOR_STATES] {
    assert_eq!(
        chromosome.len(),
        CHROMOSOME_LENGTH,
        "robot chromosome must hold {CHROMOSOME_LENGTH} genes (two per sensor state), got {}",
        chromosome.len()
    );

    let mut actions = [Action::Stop; SENSOR_STATES];
    for (state, action) in actions.iter_mut().enumerate() {
        *action = Action::from_bits(chromosome[state * 2] == 1, chromosome[state * 2 + 1] == 1);
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Chromosome whose every table entry decodes to `action`.
    fn constant_chromosome(action: Action) -> Vec<i32> {
        let (high, low) = match action {
            Action::Stop => (0, 0),
            Action::Forward => (0, 1),
            Action::TurnClockwise => (1, 0),
            Action::TurnCounterClockwise => (1, 1),
        };
        let mut chromosome = Vec::with_capacity(CHROMOSOME_LENGTH);
        for _ in 0..SENSOR_STATES {
            chromosome.push(high);
            chromosome.push(low);
        }
        chromosome
    }

    fn corridor() -> Maze {
        Maze::from_codes(&[vec![2, 3, 3, 4]])
    }

    #[test]
    fn test_always_forward_walks_corridor_to_goal() {
        let maze = corridor();
        let chromosome = constant_chromosome(Action::Forward);
        let mut robot = Robot::new(&chromosome, &maze, 100);
        robot.run();

        assert_eq!(robot.position(), (3, 0));
        assert_eq!(robot.route(), &[(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(maze.score_route(robot.route()), 2);
    }

    #[test]
    fn test_always_stop_goes_nowhere() {
        let maze = corridor();
        let chromosome = constant_chromosome(Action::Stop);
        let mut robot = Robot::new(&chromosome, &maze, 100);
        robot.run();

        assert_eq!(robot.position(), (0, 0));
        assert_eq!(robot.route(), &[(0, 0)]);
    }

    #[test]
    fn test_turning_spins_in_place_until_cap() {
        let maze = corridor();
        let chromosome = constant_chromosome(Action::TurnClockwise);
        let mut robot = Robot::new(&chromosome, &maze, 10);
        robot.run();

        // Cap termination is normal: position never changed.
        assert_eq!(robot.position(), (0, 0));
        assert_eq!(robot.route().len(), 1);
    }

    #[test]
    fn test_heading_rotations() {
        assert_eq!(Heading::North.clockwise(), Heading::East);
        assert_eq!(Heading::East.clockwise(), Heading::South);
        assert_eq!(Heading::South.clockwise(), Heading::West);
        assert_eq!(Heading::West.clockwise(), Heading::North);

        assert_eq!(Heading::North.counter_clockwise(), Heading::West);
        assert_eq!(Heading::West.counter_clockwise(), Heading::South);
        assert_eq!(Heading::South.counter_clockwise(), Heading::East);
        assert_eq!(Heading::East.counter_clockwise(), Heading::North);
    }

    #[test]
    fn test_walls_block_forward_motion() {
        // Start boxed in by walls on all sides.
        let maze = Maze::from_codes(&[
            vec![1, 1, 1],
            vec![1, 2, 1],
            vec![1, 1, 1],
        ]);
        let chromosome = constant_chromosome(Action::Forward);
        let mut robot = Robot::new(&chromosome, &maze, 20);
        robot.run();

        assert_eq!(robot.position(), (1, 1));
        assert_eq!(robot.route(), &[(1, 1)]);
    }

    #[test]
    fn test_sensor_value_facing_east() {
        // Walls above and below the start; the corridor runs east.
        let maze = Maze::from_codes(&[
            vec![1, 1, 1, 1],
            vec![2, 3, 3, 4],
            vec![1, 1, 1, 1],
        ]);
        let chromosome = constant_chromosome(Action::Forward);
        let mut robot = Robot::new(&chromosome, &maze, 100);

        // Facing East at (0, 1): front (1,1) open, front-left (1,0) wall,
        // front-right (1,2) wall, left (0,0) wall, right (0,2) wall,
        // back (-1,1) off-grid wall.
        assert_eq!(robot.sensor_value(), 2 + 4 + 8 + 16 + 32);
    }

    #[test]
    fn test_sensor_cache_resets_after_step() {
        let maze = corridor();
        let chromosome = constant_chromosome(Action::Forward);
        let mut robot = Robot::new(&chromosome, &maze, 100);

        let before = robot.sensor_value();
        robot.step();
        let after = robot.sensor_value();
        // At (1, 0) the back cell is open, at (0, 0) it was off-grid wall.
        assert_ne!(before, after);
    }

    #[test]
    #[should_panic(expected = "robot chromosome must hold")]
    fn test_wrong_chromosome_length_panics() {
        let maze = corridor();
        Robot::new(&[0, 1, 0, 1], &maze, 100);
    }
}
