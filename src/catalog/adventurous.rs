// Adventurous category records.
use super::{Energy, SuggestionRecord};

pub static ADVENTUROUS: [SuggestionRecord; 31] = [
    SuggestionRecord {
        title: "Hampstead Heath to Highgate",
        description: "Hike through ancient woodlands and famous landmarks with stunning views.",
        duration: "90 min",
        energy: Energy::High,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Hampstead+Heath+London"),
    },
    SuggestionRecord {
        title: "Thames Path Adventure",
        description: "Walk from Tower Bridge to Greenwich along the south bank.",
        duration: "120 min",
        energy: Energy::High,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Thames+Path+London"),
    },
    SuggestionRecord {
        title: "Hyde Park Cycling",
        description: "Rent a bike and explore the vast park including Kensington Gardens.",
        duration: "60 min",
        energy: Energy::High,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Hyde+Park+London"),
    },
    SuggestionRecord {
        title: "Regent's Canal Boat Walk",
        description: "Follow the canal from Little Venice through to the Olympic Park.",
        duration: "120 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Regent's+Canal+London"),
    },
    SuggestionRecord {
        title: "Borough Market Scavenger",
        description: "Try three different street foods and identify three London cheese varieties.",
        duration: "45 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Borough+Market+London"),
    },
    SuggestionRecord {
        title: "Highgate Cemetery Explore",
        description: "Walk through Victorian graves and learn about London's history.",
        duration: "60 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Highgate+Cemetery+London"),
    },
    SuggestionRecord {
        title: "Shoreditch Street Art Hunt",
        description: "Discover famous murals while exploring East London's graffiti scene.",
        duration: "60 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Shoreditch+London"),
    },
    SuggestionRecord {
        title: "Columbia Road Flower Market",
        description: "Navigate the crowded Sunday morning flower market at peak hours.",
        duration: "45 min",
        energy: Energy::High,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Columbia+Road+Flower+Market+London"),
    },
    SuggestionRecord {
        title: "Primrose Hill Sunset Climb",
        description: "Race to the top for golden hour views over the entire city.",
        duration: "30 min",
        energy: Energy::High,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Primrose+Hill+London"),
    },
    SuggestionRecord {
        title: "Spitalfields Market Explore",
        description: "Browse vintage, crafts, and food in this historic covered market.",
        duration: "45 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Spitalfields+Market+London"),
    },
    SuggestionRecord {
        title: "Maltby Street Market",
        description: "Discover this under-the-rails food market in Bermondsey.",
        duration: "30 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Maltby+Street+Market+London"),
    },
    SuggestionRecord {
        title: "Greenwich Park Viewpoint",
        description: "Climb the hill for panoramic views of London and the Thames.",
        duration: "45 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Greenwich+Park+London"),
    },
    SuggestionRecord {
        title: "Canary Wharf to Stratford",
        description: "Walk through Docklands transformation and Olympic Park legacy.",
        duration: "90 min",
        energy: Energy::High,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Canary+Wharf+London"),
    },
    SuggestionRecord {
        title: "Brompton Cemetery Night Walk",
        description: "Experience the atmospheric Victorian cemetery after dusk.",
        duration: "30 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Brompton+Cemetery+London"),
    },
    SuggestionRecord {
        title: "Richmond Park Deer Watching",
        description: "Spot red and fallow deer in London's largest royal park.",
        duration: "60 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Richmond+Park+London"),
    },
    SuggestionRecord {
        title: "Kew Gardens Treetop Walkway",
        description: "Experience views from 18 meters above the ground canopy walk.",
        duration: "45 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Kew+Gardens+London"),
    },
    SuggestionRecord {
        title: "Leake Street Tunnel",
        description: "Walk through Banksy's legal graffiti tunnel beneath Waterloo Station.",
        duration: "15 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Leake+Street+Tunnel+London"),
    },
    SuggestionRecord {
        title: "Neasden Temple Exploration",
        description: "Discover London's traditional Hindu temple with guided tour.",
        duration: "60 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Neasden+Temple+London"),
    },
    SuggestionRecord {
        title: "Barbican Architecture Walk",
        description: "Explore this brutalist masterpiece and its elevated walkways.",
        duration: "45 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Barbican+London"),
    },
    SuggestionRecord {
        title: "Westminster Parliament Visit",
        description: "Tour the Houses of Parliament and learn UK legislative history.",
        duration: "90 min",
        energy: Energy::High,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Palace+of+Westminster+London"),
    },
    SuggestionRecord {
        title: "Tower of London",
        description: "Explore the fortress, tower, and see the Crown Jewels.",
        duration: "120 min",
        energy: Energy::High,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Tower+of+London"),
    },
    SuggestionRecord {
        title: "Sky Garden Viewpoint",
        description: "Visit the free public garden with panoramic city views from the 35th floor.",
        duration: "45 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Sky+Garden+London"),
    },
    SuggestionRecord {
        title: "HMS Belfast Ship",
        description: "Explore this WWII naval museum ship moored on the Thames.",
        duration: "60 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=HMS+Belfast+London"),
    },
    SuggestionRecord {
        title: "Tate Modern Turbine Hall",
        description: "Visit the world's most visited modern art museum.",
        duration: "90 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Tate+Modern+London"),
    },
    SuggestionRecord {
        title: "Natural History Museum",
        description: "Discover the building's cathedral-like architecture and dinosaur exhibits.",
        duration: "120 min",
        energy: Energy::High,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Natural+History+Museum+London"),
    },
    SuggestionRecord {
        title: "British Museum Rosetta Stone",
        description: "Visit the famous Egyptian gallery and see the Rosetta Stone.",
        duration: "90 min",
        energy: Energy::High,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=British+Museum+London"),
    },
    SuggestionRecord {
        title: "Greenwich Observatory",
        description: "Stand on the Prime Meridian and enjoy the maritime museum.",
        duration: "90 min",
        energy: Energy::High,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Royal+Observatory+Greenwich"),
    },
    SuggestionRecord {
        title: "Victoria and Albert Museum",
        description: "Explore the world's largest museum of decorative arts.",
        duration: "120 min",
        energy: Energy::High,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Victoria+and+Albert+Museum+London"),
    },
    SuggestionRecord {
        title: "Science Museum Wonderlab",
        description: "Interactive displays and historic scientific artifacts.",
        duration: "90 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Science+Museum+London"),
    },
    SuggestionRecord {
        title: "Imperial War Museum",
        description: "Learn about British military history through powerful exhibitions.",
        duration: "90 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Imperial+War+Museum+London"),
    },
    SuggestionRecord {
        title: "Design Museum Kensington",
        description: "Explore contemporary design and architecture exhibitions.",
        duration: "60 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Design+Museum+London"),
    },
];
