// Chill category records.
use super::{Energy, SuggestionRecord};

pub static CHILL: [SuggestionRecord; 30] = [
    SuggestionRecord {
        title: "Regent's Park Stroll",
        description: "Wander through Queen Mary's Gardens and spot the rose varieties in bloom.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Regent's+Park+London"),
    },
    SuggestionRecord {
        title: "Bermondsey Antiques Browse",
        description: "Explore the antique market at Bermondsey Square early on Friday morning.",
        duration: "90 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Bermondsey+Square+Antiques+Market+London"),
    },
    SuggestionRecord {
        title: "Dawn at Primrose Hill",
        description: "Watch the sun rise over the London skyline from this peaceful hilltop.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Primrose+Hill+London"),
    },
    SuggestionRecord {
        title: "Southwark Cathedral Garden Sit",
        description: "Rest in the quiet garden surrounded by history and herbs.",
        duration: "30 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Southwark+Cathedral+London"),
    },
    SuggestionRecord {
        title: "Lincoln's Inn Fields",
        description: "Read a book on London's largest public square, surrounded by legal history.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Lincoln's+Inn+Fields+London"),
    },
    SuggestionRecord {
        title: "Hampstead Heath Ponds",
        description: "Visit one of the serene swimming ponds or just walk the woodland paths.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Hampstead+Heath+London"),
    },
    SuggestionRecord {
        title: "Postman's Park",
        description: "Reflect at the Watts Memorial to Heroic Self-Sacrifice in this peaceful garden.",
        duration: "20 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Postman's+Park+London"),
    },
    SuggestionRecord {
        title: "Barbican Conservatory",
        description: "Wander through this tropical oasis hidden in brutalist architecture.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Barbican+Conservatory+London"),
    },
    SuggestionRecord {
        title: "St Dunstan in the East",
        description: "Visit this bombed-out church turned into a beautiful public garden.",
        duration: "30 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=St+Dunstan+in+the+East+London"),
    },
    SuggestionRecord {
        title: "Canal Walk from Little Venice",
        description: "Follow the Regent's Canal path to Camden at a leisurely pace.",
        duration: "90 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Little+Venice+London"),
    },
    SuggestionRecord {
        title: "Kew Gardens Tea Room",
        description: "Enjoy a peaceful afternoon tea surrounded by rare plants and Victorian glasshouses.",
        duration: "120 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Kew+Gardens+London"),
    },
    SuggestionRecord {
        title: "St Katharine Docks",
        description: "Walk around the marina and enjoy the boat-filled basin away from the crowds.",
        duration: "30 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=St+Katharine+Docks+London"),
    },
    SuggestionRecord {
        title: "Alexandra Palace",
        description: "Take in panoramic views of London from this Victorian entertainment palace.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Alexandra+Palace+London"),
    },
    SuggestionRecord {
        title: "Pitzhanger Manor",
        description: "Explore this restored Georgian villa with its tranquil gardens.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Pitzhanger+Manor+Ealing"),
    },
    SuggestionRecord {
        title: "Kyoto Garden in Holland Park",
        description: "Find peace in this authentic Japanese garden with waterfall and koi pond.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Holland+Park+Kyoto+Garden+London"),
    },
    SuggestionRecord {
        title: "Victoria Park Canal Basin",
        description: "Sit by the canal and watch the boats pass by in East London's oldest park.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Victoria+Park+London"),
    },
    SuggestionRecord {
        title: "Brompton Cemetery",
        description: "Walk through beautifully landscaped Victorian cemetery with impressive monuments.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Brompton+Cemetery+London"),
    },
    SuggestionRecord {
        title: "Leighton House Conservatory",
        description: "Visit the Arab Hall and gardens in this artist's home and studio.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Leighton+House+London"),
    },
    SuggestionRecord {
        title: "Chelsea Physic Garden",
        description: "Explore London's oldest botanical garden with medicinal and rare plants.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Chelsea+Physic+Garden+London"),
    },
    SuggestionRecord {
        title: "Garden Museum Courtyard",
        description: "Sit in this former church's peaceful courtyard next to Lambeth Palace.",
        duration: "30 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Garden+Museum+London"),
    },
    SuggestionRecord {
        title: "River Walk from Greenwich",
        description: "Follow the Thames path eastward past historic ships and modern architecture.",
        duration: "90 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Greenwich+London"),
    },
    SuggestionRecord {
        title: "Borough Market Quiet Corner",
        description: "Visit early to beat the crowds and enjoy a peaceful food market experience.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Borough+Market+London"),
    },
    SuggestionRecord {
        title: "Neasden Temple",
        description: "Visit this magnificent Hindu temple with its intricate marble carvings and peaceful atmosphere.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Neasden+Temple+London"),
    },
    SuggestionRecord {
        title: "Finsbury Park Rose Garden",
        description: "Spend time in this beautifully maintained garden with over 100 rose varieties.",
        duration: "30 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Finsbury+Park+London"),
    },
    SuggestionRecord {
        title: "Clapham Common Windmill",
        description: "Visit the restored windmill and enjoy the common's open spaces.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Clapham+Common+Windmill+London"),
    },
    SuggestionRecord {
        title: "St James's Park Lake",
        description: "Watch pelicans and swans while feeding on the park's island.",
        duration: "30 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=St+James's+Park+London"),
    },
    SuggestionRecord {
        title: "Holland Park Kyoto Walk",
        description: "Wander through the Japanese garden and peaceful woodland paths.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Holland+Park+Kyoto+Walk+London"),
    },
    SuggestionRecord {
        title: "Crystal Palace Park Dinosaurs",
        description: "Visit the historic Victorian dinosaur sculptures in the park.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Crystal+Palace+Park+Dinosaurs+London"),
    },
    SuggestionRecord {
        title: "Morden Hall Park",
        description: "Explore this former estate with meadows, wetlands, and heritage rose garden.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Morden+Hall+Park+London"),
    },
    SuggestionRecord {
        title: "Canary Wharf Winter Garden",
        description: "Sit in the indoor tropical garden surrounded by skyscrapers.",
        duration: "30 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Canary+Wharf+Winter+Garden+London"),
    },
];
