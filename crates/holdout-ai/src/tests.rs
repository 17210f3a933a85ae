#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use glam::Vec3;

    use holdout_core::components::{Agent, Perception};
    use holdout_core::constants::*;
    use holdout_core::enums::{AgentState, EnemyArchetype};

    use crate::combat::{hit, is_dead, HitOutcome};
    use crate::fsm::{evaluate, step_towards, AgentContext};
    use crate::perception::{forward_from_yaw, is_player_in_sight, yaw_towards};
    use crate::profiles::get_profile;

    const EPS: f32 = 1e-4;

    fn walker_perception() -> Perception {
        Perception {
            field_of_view: WALKER_FIELD_OF_VIEW,
            sight_range: WALKER_SIGHT_RANGE,
        }
    }

    fn make_agent(health: f32) -> Agent {
        Agent {
            id: 1,
            archetype: EnemyArchetype::Walker,
            state: AgentState::Idle,
            health,
            movement_speed: WALKER_SPEED,
            damage: WALKER_DAMAGE,
            yaw: 0.0,
            attack_cooldown: 0,
            player_visible: false,
        }
    }

    /// Agent at the origin facing +Z, player somewhere on the map.
    fn make_context(state: AgentState, yaw: f32, player: Vec3) -> AgentContext {
        AgentContext {
            state,
            health: WALKER_HEALTH,
            position: Vec3::ZERO,
            yaw,
            perception: walker_perception(),
            movement_speed: WALKER_SPEED,
            player_position: player,
            dt: DT,
        }
    }

    // ---- Perception ----

    #[test]
    fn test_forward_from_yaw() {
        assert!(forward_from_yaw(0.0).distance(Vec3::Z) < EPS);
        assert!(forward_from_yaw(FRAC_PI_2).distance(Vec3::X) < EPS);
    }

    #[test]
    fn test_yaw_towards_faces_target() {
        let yaw = yaw_towards(Vec3::ZERO, Vec3::new(-3.0, 10.0, 0.0), 0.0);
        assert!((yaw + FRAC_PI_2).abs() < EPS, "yaw = {yaw}");
        // Target straight overhead keeps the current heading.
        assert_eq!(yaw_towards(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0), 1.25), 1.25);
    }

    #[test]
    fn test_player_ahead_in_range_is_seen() {
        let seen = is_player_in_sight(Vec3::ZERO, 0.0, &walker_perception(), Vec3::new(1.0, 2.0, 10.0));
        assert!(seen);
    }

    #[test]
    fn test_player_behind_is_not_seen() {
        let seen = is_player_in_sight(Vec3::ZERO, 0.0, &walker_perception(), Vec3::new(0.0, 2.0, -10.0));
        assert!(!seen);
    }

    #[test]
    fn test_player_outside_cone_edge_is_not_seen() {
        // 60 degrees off-axis with a 90 degree field of view.
        let angle = PI / 3.0;
        let player = Vec3::new(angle.sin(), 0.0, angle.cos()) * 10.0;
        assert!(!is_player_in_sight(Vec3::ZERO, 0.0, &walker_perception(), player));
    }

    #[test]
    fn test_player_beyond_sight_range_is_not_seen() {
        let player = Vec3::new(0.0, 0.0, WALKER_SIGHT_RANGE + 0.5);
        assert!(!is_player_in_sight(Vec3::ZERO, 0.0, &walker_perception(), player));
    }

    #[test]
    fn test_eye_height_does_not_hide_close_player() {
        // Player one unit ahead but two units up (eye height).
        let player = Vec3::new(0.0, 2.0, 1.0);
        assert!(is_player_in_sight(Vec3::ZERO, 0.0, &walker_perception(), player));
    }

    // ---- FSM ----

    #[test]
    fn test_idle_detects_and_pursues() {
        let ctx = make_context(AgentState::Idle, 0.0, Vec3::new(0.0, 2.0, 10.0));
        let update = evaluate(&ctx);
        assert!(update.state_changed);
        assert_eq!(update.new_state, AgentState::Pursuing);
        assert!(update.player_visible);
        // Moved one tick's worth toward +Z, stayed on the ground.
        assert!((update.new_position.z - WALKER_SPEED * DT).abs() < EPS);
        assert_eq!(update.new_position.y, 0.0);
    }

    #[test]
    fn test_idle_stays_idle_when_player_behind() {
        let ctx = make_context(AgentState::Idle, 0.0, Vec3::new(0.0, 2.0, -10.0));
        let update = evaluate(&ctx);
        assert!(!update.state_changed);
        assert_eq!(update.new_state, AgentState::Idle);
        assert_eq!(update.new_position, Vec3::ZERO);
    }

    #[test]
    fn test_pursuer_turns_toward_player_behind_it() {
        let ctx = make_context(AgentState::Pursuing, 0.0, Vec3::new(0.0, 2.0, -10.0));
        let update = evaluate(&ctx);
        assert_eq!(update.new_state, AgentState::Pursuing);
        assert!(!update.player_visible, "cone test still fails this tick");
        assert!((update.new_yaw.abs() - PI).abs() < EPS);
        assert!(update.new_position.z < 0.0);
    }

    #[test]
    fn test_pursuer_loses_player_beyond_range() {
        let ctx = make_context(
            AgentState::Pursuing,
            0.0,
            Vec3::new(0.0, 2.0, WALKER_SIGHT_RANGE + 1.0),
        );
        let update = evaluate(&ctx);
        assert!(update.state_changed);
        assert_eq!(update.new_state, AgentState::Idle);
        assert_eq!(update.new_position, Vec3::ZERO);
    }

    #[test]
    fn test_zero_health_transitions_to_dead() {
        let mut ctx = make_context(AgentState::Pursuing, 0.0, Vec3::new(0.0, 2.0, 10.0));
        ctx.health = 0.0;
        let update = evaluate(&ctx);
        assert_eq!(update.new_state, AgentState::Dead);
        assert_eq!(update.new_position, Vec3::ZERO);
    }

    #[test]
    fn test_dead_is_terminal() {
        let ctx = make_context(AgentState::Dead, 0.0, Vec3::new(0.0, 2.0, 10.0));
        let update = evaluate(&ctx);
        assert!(!update.state_changed);
        assert_eq!(update.new_state, AgentState::Dead);
    }

    #[test]
    fn test_step_towards_never_overshoots() {
        let target = Vec3::new(0.5, 3.0, 0.0);
        let stepped = step_towards(Vec3::ZERO, target, 10.0);
        assert_eq!(stepped, Vec3::new(0.5, 0.0, 0.0));
    }

    // ---- Combat ----

    #[test]
    fn test_two_half_hits_kill_on_second() {
        let mut agent = make_agent(100.0);
        assert_eq!(hit(&mut agent, 50.0), HitOutcome::Wounded);
        assert!(!is_dead(&agent));
        assert_eq!(hit(&mut agent, 50.0), HitOutcome::Killed);
        assert!(is_dead(&agent));
        assert!(agent.health <= 0.0);
    }

    #[test]
    fn test_hit_alerts_idle_agent() {
        let mut agent = make_agent(100.0);
        hit(&mut agent, 10.0);
        assert_eq!(agent.state, AgentState::Pursuing);
    }

    #[test]
    fn test_dead_agent_ignores_hits() {
        let mut agent = make_agent(10.0);
        hit(&mut agent, 20.0);
        let health = agent.health;
        assert_eq!(hit(&mut agent, 20.0), HitOutcome::Ignored);
        assert_eq!(agent.health, health);
    }

    // ---- Profiles ----

    #[test]
    fn test_profiles_are_distinct_and_playable() {
        let walker = get_profile(EnemyArchetype::Walker);
        let runner = get_profile(EnemyArchetype::Runner);
        let brute = get_profile(EnemyArchetype::Brute);

        assert!(runner.movement_speed > walker.movement_speed);
        assert!(brute.health > walker.health);
        assert!(brute.movement_speed < walker.movement_speed);

        // An eye-level ray (y = 2) must be able to reach every hit sphere.
        for profile in [walker, runner, brute] {
            let gap = (profile.collider_offset - PLAYER_SPAWN[1]).abs();
            assert!(gap < profile.collider_radius, "{profile:?}");
            assert!(profile.field_of_view > 0.0 && profile.field_of_view < 2.0 * PI);
        }
    }
}
