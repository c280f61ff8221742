use rand::Rng;

use crate::config::TEAM_SIZE;

pub const FIRST_NAMES: [&str; 15] = [
    "Sambath", "Bopha", "Vireak", "Sokha", "Dara", "Chea", "Nary", "Piseth",
    "Rithy", "Sophal", "Bona", "Chanthou", "Malis", "Vanna", "Srey",
];

pub const ROLES: [&str; 8] = [
    "Frontend Dev", "Backend Dev", "Fullstack", "DevOps",
    "UI/UX Designer", "Product Owner", "QA Engineer", "AI Researcher",
];

pub const AVATARS: [&str; 15] = [
    "👺", "🤠", "👩‍💻", "👨‍💻", "🤖", "👽", "🦄", "🐉", "🧙‍♂️", "🧛‍♀️", "🧟", "🧞", "🧝", "🧚", "🧜‍♂️",
];

#[derive(Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

/// Names are taken in order, avatars cycle, roles are drawn from `rng`.
pub fn generate_team<R: Rng>(rng: &mut R) -> Vec<TeamMember> {
    (0..TEAM_SIZE)
        .map(|i| TeamMember {
            name: FIRST_NAMES[i % FIRST_NAMES.len()],
            role: ROLES[rng.gen_range(0..ROLES.len())],
            avatar: AVATARS[i % AVATARS.len()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn fifteen_members_in_name_order() {
        let team = generate_team(&mut SmallRng::seed_from_u64(7));
        assert_eq!(team.len(), 15);
        for (i, member) in team.iter().enumerate() {
            assert_eq!(member.name, FIRST_NAMES[i]);
            assert_eq!(member.avatar, AVATARS[i % 15]);
            assert!(ROLES.contains(&member.role));
        }
    }

    #[test]
    fn same_seed_same_roles() {
        let a = generate_team(&mut SmallRng::seed_from_u64(42));
        let b = generate_team(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
