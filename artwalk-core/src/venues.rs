//! Partner venues and the walk formats offered at them.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub slug: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub hero_image: &'static str,
    pub images: &'static [Image],
    pub tagline: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TourType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub note: Option<&'static str>,
}

pub static VENUES: &[Venue] = &[
    Venue {
        slug: "louisiana",
        name: "Louisiana Museum of Modern Art",
        short_name: "Louisiana",
        hero_image: "/venues/louisiana-basquiat.jpg",
        images: &[
            Image { src: "/venues/louisiana-basquiat.jpg", alt: "Jean-Michel Basquiat at Louisiana Museum" },
            Image { src: "/venues/louisiana-arbus.jpg", alt: "Diane Arbus at Louisiana Museum" },
        ],
        tagline: "Where the sea meets art",
        description: "Galleries that open onto the sea, where the art and the landscape talk to each other.",
    },
    Venue {
        slug: "arken",
        name: "ARKEN Museum of Modern Art",
        short_name: "Arken",
        hero_image: "/venues/arken-alqadiri.jpg",
        images: &[
            Image { src: "/venues/arken-alqadiri.jpg", alt: "Monira Al Qadiri, BENZENE FLOAT at Arken" },
            Image { src: "/venues/arken-rasmussen.jpg", alt: "Kenneth Rasmussen installation at Arken" },
            Image { src: "/venues/arken-andersen.jpg", alt: "Villiam Miklos Andersen, Flora's Wagons of Fools at Arken" },
        ],
        tagline: "Bold architecture, bold art",
        description: "A striking building with exhibitions that push boundaries. We slow down in a loud space and find its quiet moments.",
    },
    Venue {
        slug: "simian",
        name: "Simian",
        short_name: "Simian",
        hero_image: "/venues/simian-xenakis.png",
        images: &[
            Image { src: "/venues/simian-xenakis.png", alt: "Iannis Xenakis, La Légende d'Eer at Simian" },
            Image { src: "/venues/simian-extended-views.png", alt: "Extended Views II at Simian" },
            Image { src: "/venues/simian-langer.png", alt: "Laura Langer, Why am I me? at Simian" },
        ],
        tagline: "Art at the edge",
        description: "Experimental work that resists easy interpretation. We sit with the unfamiliar and let it speak in its own time.",
    },
    Venue {
        slug: "charlottenborg",
        name: "Kunsthal Charlottenborg",
        short_name: "Charlottenborg",
        hero_image: "/venues/charlottenborg-mirga-tas.png",
        images: &[
            Image { src: "/venues/charlottenborg-mirga-tas.png", alt: "Małgorzata Mirga-Tas at Kunsthal Charlottenborg" },
        ],
        tagline: "Contemporary art in the heart of Copenhagen",
        description: "Current, provocative exhibitions between Nyhavn and Kongens Nytorv, engaging with the world we live in now.",
    },
];

pub static TOUR_TYPES: &[TourType] = &[
    TourType {
        id: "regular",
        name: "Regular Walk",
        description: "Join a small group for an attentive walk through the museum. Open to all.",
        price: "Free",
        note: Some("Museum entrance ticket required"),
    },
    TourType {
        id: "families-couples",
        name: "Families & Couples",
        description: "A private walk designed for you and your loved ones. A shared experience through art.",
        price: "Contact for details",
        note: None,
    },
    TourType {
        id: "teambuilding",
        name: "Teambuilding",
        description: "Three sessions: one at your workplace, one in the museum, one back at work.",
        price: "Contact for details",
        note: Some("B2B packages available"),
    },
];

pub fn venue_by_slug(slug: &str) -> Option<&'static Venue> {
    VENUES.iter().find(|v| v.slug == slug)
}

pub fn tour_type_by_id(id: &str) -> Option<&'static TourType> {
    TOUR_TYPES.iter().find(|t| t.id == id)
}
