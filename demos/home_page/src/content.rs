// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static page copy.

pub(crate) const COMPANY: &str = "Amex Transport Inc";
pub(crate) const HERO_TITLE: &str = "AMEX TRANSPORTS";
pub(crate) const HERO_TAGLINE: &str = "CAPABLE.";
pub(crate) const HERO_LEAD: &str =
    "Heavy Haul & Specialized Load Transportation with Precision and Care";
pub(crate) const HERO_DETAIL: &str = "Based in Dayton, Ohio \u{2022} Nationwide Coverage \u{2022} \
     Specialized Equipment & Expert Drivers";
pub(crate) const ADDRESS: &str = "1435 Webster St, Dayton, OH 45404";
pub(crate) const COPYRIGHT: &str = "\u{a9} 2024 Amex Transport Inc. All rights reserved. | \
     1435 Webster St, Dayton, OH 45404 | Nationwide Coverage";

pub(crate) struct Service {
    pub(crate) title: &'static str,
    pub(crate) icon: &'static str,
    pub(crate) description: &'static str,
    pub(crate) features: [&'static str; 4],
}

pub(crate) const SERVICES: [Service; 4] = [
    Service {
        title: "RGN Superload Transport",
        icon: "\u{1f69b}",
        description: "Specialized transportation for oversized and overweight loads requiring \
                      removable gooseneck trailers with precision handling.",
        features: [
            "Up to 40,000 lbs capacity",
            "Customized transport plans",
            "24/7 dispatch",
            "Permit coordination",
        ],
    },
    Service {
        title: "Heavy Equipment Hauling",
        icon: "\u{1f3d7}\u{fe0f}",
        description: "Expert transport of construction equipment, excavators, bulldozers, \
                      cranes, and other heavy machinery with specialized equipment.",
        features: [
            "Lowboy trailers",
            "Secure loading",
            "Route planning",
            "Real-time updates",
        ],
    },
    Service {
        title: "Industrial Machinery",
        icon: "\u{2699}\u{fe0f}",
        description: "Specialized handling and transportation of industrial machinery and \
                      manufacturing equipment with expert rigging.",
        features: [
            "Precision loading",
            "Climate control",
            "Damage protection",
            "Expert rigging",
        ],
    },
    Service {
        title: "Airport & Aircraft Transport",
        icon: "\u{2708}\u{fe0f}",
        description: "Specialized transportation services for airport equipment, aircraft \
                      components, and aviation infrastructure with compliance expertise.",
        features: [
            "Aircraft components",
            "Ground support equipment",
            "Aviation infrastructure",
            "Regulatory compliance",
        ],
    },
];

pub(crate) struct Project {
    pub(crate) title: &'static str,
    pub(crate) category: &'static str,
    pub(crate) description: &'static str,
    pub(crate) image: &'static str,
    pub(crate) location: &'static str,
    pub(crate) equipment: &'static str,
    pub(crate) weight: &'static str,
    pub(crate) timeline: &'static str,
    pub(crate) challenges: &'static str,
}

impl Project {
    /// Label and value rows for the expanded details.
    pub(crate) fn detail_rows(&self) -> [(&'static str, &'static str); 4] {
        [
            ("Location:", self.location),
            ("Equipment:", self.equipment),
            ("Weight:", self.weight),
            ("Timeline:", self.timeline),
        ]
    }
}

pub(crate) const PROJECTS: [Project; 3] = [
    Project {
        title: "Airport Equipment Transport",
        category: "Aviation",
        description: "Specialized transportation of airport equipment and aviation machinery",
        image: "/gallery2.jpg",
        location: "Cleveland Hopkins International Airport",
        equipment: "Baggage handling systems, Ground support equipment",
        weight: "Up to 35,000 lbs",
        timeline: "3-5 days",
        challenges: "Precision loading, Airport security clearance, Time-sensitive delivery",
    },
    Project {
        title: "Construction Equipment",
        category: "Heavy Equipment",
        description: "Heavy construction equipment transport including excavators and bulldozers",
        image: "/gallery6.jpg",
        location: "Multiple construction sites across Ohio",
        equipment: "Excavators, Bulldozers, Cranes, Loaders",
        weight: "Up to 48,000 lbs",
        timeline: "1-3 days",
        challenges: "Oversized load permits, Route planning, Site access coordination",
    },
    Project {
        title: "Industrial Machinery",
        category: "Industrial",
        description: "Large industrial machinery transport for manufacturing facility",
        image: "/gallery35.jpeg",
        location: "Manufacturing facility in Michigan",
        equipment: "Production line machinery, Industrial presses",
        weight: "Up to 62,000 lbs",
        timeline: "5-7 days",
        challenges: "Fragile equipment handling, Climate-controlled transport, \
                     Factory floor access",
    },
];

/// One line of a contact card; `href` makes it a link.
pub(crate) struct ContactLine {
    pub(crate) text: &'static str,
    pub(crate) href: Option<&'static str>,
    /// Opens in a new tab.
    pub(crate) external: bool,
}

const fn plain(text: &'static str) -> ContactLine {
    ContactLine {
        text,
        href: None,
        external: false,
    }
}

pub(crate) struct ContactCard {
    pub(crate) icon: &'static str,
    pub(crate) title: &'static str,
    pub(crate) lines: &'static [ContactLine],
}

pub(crate) const CONTACT_CARDS: [ContactCard; 4] = [
    ContactCard {
        icon: "\u{1f4cd}",
        title: "Visit Us",
        lines: &[ContactLine {
            text: ADDRESS,
            href: Some("https://maps.google.com/?q=1435+Webster+St+Dayton+OH+45404"),
            external: true,
        }],
    },
    ContactCard {
        icon: "\u{1f4de}",
        title: "Call Us",
        lines: &[
            ContactLine {
                text: "(937) 528-9614",
                href: Some("tel:9375289614"),
                external: false,
            },
            plain("24/7 Dispatch Available"),
        ],
    },
    ContactCard {
        icon: "\u{2709}\u{fe0f}",
        title: "Email Us",
        lines: &[
            ContactLine {
                text: "amextrucks@gmail.com",
                href: Some("mailto:amextrucks@gmail.com"),
                external: false,
            },
            plain("Dispatch Available"),
            plain("Quote Requests Welcome"),
        ],
    },
    ContactCard {
        icon: "\u{1f4f7}",
        title: "Follow Us",
        lines: &[
            ContactLine {
                text: "@amex.transport",
                href: Some("https://www.instagram.com/amex.transport"),
                external: true,
            },
            plain("Latest Projects & Updates"),
        ],
    },
];
