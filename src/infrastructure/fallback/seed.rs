//! Hand-authored fallback datasets.
//!
//! Served whenever the live store is unreachable so browsing pages degrade to
//! demo content instead of breaking. The datasets are fixed: ids 1-6 for
//! properties and 1-8 for agents, never regenerated at runtime.

use crate::domain::models::{Agent, Property, PropertyType};

/// The six demo properties.
pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: 1,
            property_type: PropertyType::Apartment,
            location: "New York, NY".to_string(),
            size_sqm: 85.0,
            price_usd: 350_000.0,
            image_url: Some(
                "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?q=80&w=2070&auto=format&fit=crop"
                    .to_string(),
            ),
            agent_id: None,
        },
        Property {
            id: 2,
            property_type: PropertyType::House,
            location: "Los Angeles, CA".to_string(),
            size_sqm: 180.0,
            price_usd: 750_000.0,
            image_url: Some(
                "https://images.unsplash.com/photo-1568605114967-8130f3a36994?q=80&w=2070&auto=format&fit=crop"
                    .to_string(),
            ),
            agent_id: None,
        },
        Property {
            id: 3,
            property_type: PropertyType::Villa,
            location: "Miami, FL".to_string(),
            size_sqm: 250.0,
            price_usd: 1_200_000.0,
            image_url: Some(
                "https://images.unsplash.com/photo-1613977257363-707ba9348227?q=80&w=2070&auto=format&fit=crop"
                    .to_string(),
            ),
            agent_id: None,
        },
        Property {
            id: 4,
            property_type: PropertyType::Land,
            location: "Austin, TX".to_string(),
            size_sqm: 1000.0,
            price_usd: 500_000.0,
            image_url: Some(
                "https://images.unsplash.com/photo-1500382017468-9049fed747ef?q=80&w=2062&auto=format&fit=crop"
                    .to_string(),
            ),
            agent_id: None,
        },
        Property {
            id: 5,
            property_type: PropertyType::Commercial,
            location: "Chicago, IL".to_string(),
            size_sqm: 300.0,
            price_usd: 900_000.0,
            image_url: Some(
                "https://images.unsplash.com/photo-1497366754035-f200968a6e72?q=80&w=2069&auto=format&fit=crop"
                    .to_string(),
            ),
            agent_id: None,
        },
        Property {
            id: 6,
            property_type: PropertyType::Apartment,
            location: "San Francisco, CA".to_string(),
            size_sqm: 70.0,
            price_usd: 650_000.0,
            image_url: Some(
                "https://images.unsplash.com/photo-1493246507139-91e8fad9978e?q=80&w=2070&auto=format&fit=crop"
                    .to_string(),
            ),
            agent_id: None,
        },
    ]
}

/// The eight demo agents.
pub fn agents() -> Vec<Agent> {
    let agent = |id: i64,
                 first: &str,
                 last: &str,
                 phone: &str,
                 specialization: &str,
                 location: &str,
                 image: &str,
                 bio: &str| Agent {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        phone: phone.to_string(),
        email: format!(
            "{}.{}@realestatepro.com",
            first.to_lowercase(),
            last.to_lowercase()
        ),
        image_url: Some(image.to_string()),
        specialization: Some(specialization.to_string()),
        location: Some(location.to_string()),
        bio: Some(bio.to_string()),
    };

    vec![
        agent(
            1, "John", "Smith", "(123) 456-7890",
            "Residential Specialist", "New York, NY",
            "https://images.unsplash.com/photo-1560250097-0b93528c311a?q=80&w=1974&auto=format&fit=crop",
            "With over 15 years of experience in the real estate industry, John specializes in \
             luxury residential properties in the heart of New York City.",
        ),
        agent(
            2, "Sarah", "Johnson", "(123) 456-7891",
            "Commercial Real Estate", "Los Angeles, CA",
            "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=1976&auto=format&fit=crop",
            "Sarah is our top commercial real estate expert with a background in urban planning, \
             specializing in office buildings and retail locations throughout Los Angeles.",
        ),
        agent(
            3, "Michael", "Brown", "(123) 456-7892",
            "Luxury Properties", "Miami, FL",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?q=80&w=2070&auto=format&fit=crop",
            "Michael specializes in high-end luxury properties and waterfront estates in Miami, \
             serving executives and international investors.",
        ),
        agent(
            4, "Jennifer", "Lee", "(123) 456-7893",
            "First-Time Homebuyers", "Chicago, IL",
            "https://images.unsplash.com/photo-1580489944761-15a19d654956?q=80&w=1961&auto=format&fit=crop",
            "Jennifer is passionate about helping first-time homebuyers navigate the process of \
             purchasing their first property.",
        ),
        agent(
            5, "David", "Wilson", "(123) 456-7894",
            "Investment Properties", "Austin, TX",
            "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?q=80&w=1974&auto=format&fit=crop",
            "David is our investment property expert with a background in finance, helping \
             investors build strong real estate portfolios.",
        ),
        agent(
            6, "Emily", "Davis", "(123) 456-7895",
            "Suburban Homes", "San Francisco, CA",
            "https://images.unsplash.com/photo-1598257006458-087169a1f08d?q=80&w=2070&auto=format&fit=crop",
            "Emily specializes in family homes in the suburban areas around San Francisco, with a \
             focus on school districts and community amenities.",
        ),
        agent(
            7, "Robert", "Miller", "(123) 456-7896",
            "Vacation Properties", "Orlando, FL",
            "https://images.unsplash.com/photo-1566492031773-4f4e44671857?q=80&w=1974&auto=format&fit=crop",
            "Robert is our vacation property specialist, focusing on profitable rentals and second \
             homes in popular tourist destinations.",
        ),
        agent(
            8, "Lisa", "Thompson", "(123) 456-7897",
            "Urban Condos", "Boston, MA",
            "https://images.unsplash.com/photo-1508214751196-bcfd4ca60f91?q=80&w=2070&auto=format&fit=crop",
            "Lisa specializes in urban condominiums and lofts in downtown Boston, the go-to agent \
             for city dwellers.",
        ),
    ]
}

/// Placeholder association between seed properties and an agent.
///
/// Modulo-8 bucketing exists only to produce non-empty demo results; callers
/// must not read meaning into the distribution.
pub fn properties_for_agent(agent_id: i64) -> Vec<Property> {
    properties()
        .into_iter()
        .filter(|p| p.id % 8 == agent_id % 8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_properties_are_fixed_and_valid() {
        let properties = properties();
        assert_eq!(properties.len(), 6);
        for (index, property) in properties.iter().enumerate() {
            assert_eq!(property.id, i64::try_from(index).unwrap() + 1);
            assert!(property.size_sqm > 0.0);
            assert!(property.price_usd > 0.0);
        }
    }

    #[test]
    fn test_agents_are_fixed() {
        let agents = agents();
        assert_eq!(agents.len(), 8);
        for (index, agent) in agents.iter().enumerate() {
            assert_eq!(agent.id, i64::try_from(index).unwrap() + 1);
            assert!(agent.email.ends_with("@realestatepro.com"));
        }
    }

    #[test]
    fn test_datasets_are_deterministic() {
        assert_eq!(properties(), properties());
        assert_eq!(agents(), agents());
    }

    proptest! {
        #[test]
        fn prop_agent_association_follows_modulo_rule(agent_id in 1i64..=1000) {
            let associated = properties_for_agent(agent_id);
            for property in &associated {
                prop_assert_eq!(property.id % 8, agent_id % 8);
            }
            // Nothing matching the bucket was dropped.
            let expected = properties()
                .into_iter()
                .filter(|p| p.id % 8 == agent_id % 8)
                .count();
            prop_assert_eq!(associated.len(), expected);
        }
    }
}
