//! Static marketing copy for the public pages.
//!
//! This content changes rarely and is edited in code rather than through the
//! back-office; everything the admins manage lives in the database.

pub const BUSINESS_NAME: &str = "E&S Decorations";

/// Rotating taglines in the hero section.
pub const HERO_TAGLINES: &[&str] = &[
    "Elevating Events",
    "Creating Memories",
    "Crafting Experiences",
    "Inspiring Moments",
];

pub const ABOUT_INTRO: &str = "From our humble beginnings in Pampady, Kottayam to becoming \
Kerala's trusted name in event management, discover how we've been transforming \
celebrations into unforgettable experiences since 1995.";

#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub year: &'static str,
    pub summary: &'static str,
    pub points: &'static [&'static str],
}

/// Company timeline, newest first.
pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2024",
        summary: "Continuing our legacy of excellence with expanded services and innovative event solutions:",
        points: &[
            "Luxury Food Counters with Live Juice Conveyors",
            "Professional Photography & Videography Services",
            "Premium Stage & Event Decorations",
        ],
    },
    Milestone {
        year: "2010",
        summary: "Expanding our services to become a complete event management solution:",
        points: &[
            "Full-scale Event Management Services",
            "Professional Kitchen Rental Facilities",
            "Premium Event Equipment Hiring",
        ],
    },
    Milestone {
        year: "1995",
        summary: "Our journey began in Pampady town, Kottayam, starting as a humble catering unit with a vision for excellence:",
        points: &[
            "Established E&S Decorations",
            "Premium Catering Services",
            "Event Essentials & Equipment",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Wedding Decorations",
        description: "Transform your special day with our elegant and personalized wedding decorations that create the perfect atmosphere for your celebration.",
        image: "https://images.unsplash.com/photo-1519225421980-715cb0215aed?q=80&w=2070",
    },
    Service {
        title: "Event Styling",
        description: "Our professional event styling services ensure your venue looks stunning with cohesive themes, color schemes, and attention to detail.",
        image: "https://images.unsplash.com/photo-1511795409834-ef04bbd61622?q=80&w=2069",
    },
    Service {
        title: "Catering Services",
        description: "Delight your guests with our exceptional catering services featuring gourmet cuisine tailored to your preferences and dietary requirements.",
        image: "https://images.unsplash.com/photo-1555244162-803834f70033?q=80&w=2070",
    },
    Service {
        title: "Photography & Videography",
        description: "Capture every precious moment with our professional photography and videography services that preserve your memories for years to come.",
        image: "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?q=80&w=2073",
    },
    Service {
        title: "Entertainment Solutions",
        description: "From live bands to DJs, we provide entertainment solutions that keep your guests engaged and create an unforgettable atmosphere.",
        image: "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3?q=80&w=2070",
    },
    Service {
        title: "Corporate Event Management",
        description: "Our comprehensive corporate event management services handle everything from planning to execution, ensuring successful business gatherings.",
        image: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?q=80&w=2070",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Mr Siby",
        role: "Event Director",
        image: "/static/images/siby.jpg",
    },
    TeamMember {
        name: "Mr Eapen",
        role: "Creative Lead",
        image: "/static/images/eapen.jpg",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactDetails {
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub hours: &'static str,
}

pub const CONTACT: ContactDetails = ContactDetails {
    address: "123 Event Street, Creative City, ST 12345",
    phone: "+1 (555) 123-4567",
    email: "contact@eswebsite.com",
    hours: "Monday - Friday: 9:00 AM - 6:00 PM",
};
