use super::domain::{College, CollegeCategory, ContactDetails, EntityId, Occupancy, Pg};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn contact(phone: &str, email: &str, website: Option<&str>) -> ContactDetails {
    ContactDetails {
        phone: Some(phone.to_string()),
        email: Some(email.to_string()),
        website: website.map(str::to_string),
    }
}

/// Demo colleges used when no snapshot file is configured.
pub fn seed_colleges() -> Vec<College> {
    vec![
        College {
            id: EntityId::from("1"),
            name: "Indian Institute of Technology Delhi".to_string(),
            location: "Hauz Khas, New Delhi".to_string(),
            city: Some("Delhi".to_string()),
            state: Some("Delhi".to_string()),
            category: Some(CollegeCategory::Engineering),
            rating: Some(4.8),
            fees: Some(250_000),
            avg_package: Some(1_800_000),
            highest_package: Some(5_500_000),
            placement_percentage: Some(95),
            courses: strings(&[
                "Computer Science",
                "Electrical Engineering",
                "Mechanical Engineering",
                "Civil Engineering",
            ]),
            facilities: strings(&["Library", "Hostel", "Sports Complex", "Labs", "Cafeteria"]),
            recruiters: strings(&["Microsoft", "Google", "Amazon", "Goldman Sachs"]),
            campus_area: Some("325 acres".to_string()),
            contact: contact(
                "+91-11-2659-1749",
                "webmaster@admin.iitd.ac.in",
                Some("https://home.iitd.ac.in"),
            ),
        },
        College {
            id: EntityId::from("2"),
            name: "VIT University Chennai".to_string(),
            location: "Vandalur-Kelambakkam Road, Chennai".to_string(),
            city: Some("Chennai".to_string()),
            state: Some("Tamil Nadu".to_string()),
            category: Some(CollegeCategory::Engineering),
            rating: Some(4.5),
            fees: Some(200_000),
            avg_package: Some(800_000),
            highest_package: Some(3_500_000),
            placement_percentage: Some(85),
            courses: strings(&[
                "Computer Science",
                "Information Technology",
                "Electronics",
                "Biotechnology",
            ]),
            facilities: strings(&["Library", "Hostel", "Sports Complex", "Labs", "Medical Center"]),
            recruiters: strings(&["TCS", "Infosys", "Wipro", "Cognizant"]),
            campus_area: Some("300 acres".to_string()),
            contact: contact(
                "+91-44-3993-1555",
                "admissions@vit.ac.in",
                Some("https://vit.ac.in"),
            ),
        },
        College {
            id: EntityId::from("3"),
            name: "Indian Institute of Technology Bombay".to_string(),
            location: "Powai, Mumbai".to_string(),
            city: Some("Mumbai".to_string()),
            state: Some("Maharashtra".to_string()),
            category: Some(CollegeCategory::Engineering),
            rating: Some(4.8),
            fees: Some(250_000),
            avg_package: Some(2_030_000),
            highest_package: Some(18_000_000),
            placement_percentage: Some(95),
            courses: strings(&["Computer Science", "Mechanical", "Electrical", "Chemical"]),
            facilities: strings(&["Library", "Hostel", "Labs"]),
            recruiters: Vec::new(),
            campus_area: None,
            contact: ContactDetails::default(),
        },
        College {
            id: EntityId::from("4"),
            name: "National Institute of Technology Trichy".to_string(),
            location: "Tiruchirappalli".to_string(),
            city: Some("Tiruchirappalli".to_string()),
            state: Some("Tamil Nadu".to_string()),
            category: Some(CollegeCategory::Engineering),
            rating: Some(4.6),
            fees: Some(120_000),
            avg_package: Some(1_280_000),
            highest_package: Some(4_500_000),
            placement_percentage: Some(92),
            courses: strings(&["Computer Science", "Mechanical", "Civil", "ECE"]),
            facilities: Vec::new(),
            recruiters: Vec::new(),
            campus_area: None,
            contact: ContactDetails::default(),
        },
    ]
}

/// Demo PG listings used when no snapshot file is configured.
pub fn seed_pgs() -> Vec<Pg> {
    vec![
        Pg {
            id: EntityId::from("1"),
            name: "Elite Boys PG".to_string(),
            location: "Near IIT Delhi".to_string(),
            city: Some("Delhi".to_string()),
            rent: Some(12_000),
            occupancy: Some(Occupancy::Boys),
            facilities: strings(&["WiFi", "AC", "Laundry", "Meals", "Security"]),
            nearby_colleges: strings(&["IIT Delhi", "JNU"]),
            rating: Some(4.2),
            contact: contact("+91-9876543210", "elite@pg.com", None),
        },
        Pg {
            id: EntityId::from("2"),
            name: "Safe Haven Girls PG".to_string(),
            location: "Near VIT Chennai".to_string(),
            city: Some("Chennai".to_string()),
            rent: Some(10_000),
            occupancy: Some(Occupancy::Girls),
            facilities: strings(&["WiFi", "AC", "Laundry", "Meals", "24/7 Security"]),
            nearby_colleges: strings(&["VIT Chennai", "Anna University"]),
            rating: Some(4.5),
            contact: contact("+91-9876543211", "safehaven@pg.com", None),
        },
        Pg {
            id: EntityId::from("3"),
            name: "Tech Hub Co-living".to_string(),
            location: "Koramangala, Bangalore".to_string(),
            city: Some("Bangalore".to_string()),
            rent: Some(18_000),
            occupancy: Some(Occupancy::CoEd),
            facilities: strings(&["WiFi", "AC", "Gym", "Meals", "Parking", "Security"]),
            nearby_colleges: strings(&["IIIT Bangalore"]),
            rating: Some(4.7),
            contact: ContactDetails::default(),
        },
    ]
}
