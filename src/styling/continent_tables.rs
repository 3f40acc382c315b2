//! Country lookup tables used by the continent classifier.
//!
//! Names cover the spellings and abbreviations common in Natural Earth and
//! world-atlas exports; codes follow ISO 3166-1 alpha-3 plus `XKX` for Kosovo.

use super::continents::Continent::{self, *};

/// Country name variants, matched case-sensitively
pub(crate) const COUNTRY_NAMES: &[(&str, Continent)] = &[
    // Africa
    ("Algeria", Africa), ("Angola", Africa), ("Benin", Africa),
    ("Botswana", Africa), ("Burkina Faso", Africa), ("Burundi", Africa),
    ("Cameroon", Africa), ("Cape Verde", Africa), ("Central African Rep.", Africa),
    ("Central African Republic", Africa), ("Chad", Africa), ("Comoros", Africa),
    ("Congo", Africa), ("Republic of the Congo", Africa), ("Rep. of the Congo", Africa),
    ("Democratic Republic of the Congo", Africa), ("Dem. Rep. Congo", Africa), ("Dem. Rep. of the Congo", Africa),
    ("Côte d'Ivoire", Africa), ("Ivory Coast", Africa), ("Djibouti", Africa),
    ("Egypt", Africa), ("Equatorial Guinea", Africa), ("Eq. Guinea", Africa),
    ("Eritrea", Africa), ("Ethiopia", Africa), ("eSwatini", Africa),
    ("Swaziland", Africa), ("Gabon", Africa), ("Gambia", Africa),
    ("The Gambia", Africa), ("Ghana", Africa), ("Guinea", Africa),
    ("Guinea-Bissau", Africa), ("Guinea Bissau", Africa), ("Kenya", Africa),
    ("Lesotho", Africa), ("Liberia", Africa), ("Libya", Africa),
    ("Madagascar", Africa), ("Malawi", Africa), ("Mali", Africa),
    ("Mauritania", Africa), ("Mauritius", Africa), ("Morocco", Africa),
    ("Mozambique", Africa), ("Namibia", Africa), ("Niger", Africa),
    ("Nigeria", Africa), ("Rwanda", Africa), ("São Tomé and Príncipe", Africa),
    ("Sao Tome and Principe", Africa), ("Senegal", Africa), ("Seychelles", Africa),
    ("Sierra Leone", Africa), ("Somalia", Africa), ("Somaliland", Africa),
    ("South Africa", Africa), ("S. Africa", Africa), ("South Sudan", Africa),
    ("S. Sudan", Africa), ("Sudan", Africa), ("Tanzania", Africa),
    ("United Republic of Tanzania", Africa), ("Togo", Africa), ("Tunisia", Africa),
    ("Uganda", Africa), ("W. Sahara", Africa), ("Western Sahara", Africa),
    ("Zambia", Africa), ("Zimbabwe", Africa),

    // Asia
    ("Afghanistan", Asia), ("Armenia", Asia), ("Azerbaijan", Asia),
    ("Bahrain", Asia), ("Bangladesh", Asia), ("Bhutan", Asia),
    ("Brunei", Asia), ("Brunei Darussalam", Asia), ("Cambodia", Asia),
    ("China", Asia), ("Georgia", Asia), ("India", Asia),
    ("Indonesia", Asia), ("Iran", Asia), ("Iraq", Asia),
    ("Israel", Asia), ("Japan", Asia), ("Jordan", Asia),
    ("Kazakhstan", Asia), ("Kuwait", Asia), ("Kyrgyzstan", Asia),
    ("Laos", Asia), ("Lao PDR", Asia), ("Lebanon", Asia),
    ("Malaysia", Asia), ("Maldives", Asia), ("Mongolia", Asia),
    ("Myanmar", Asia), ("Nepal", Asia), ("North Korea", Asia),
    ("Korea, Dem. Rep.", Asia), ("Dem. Rep. Korea", Asia), ("N. Korea", Asia),
    ("Oman", Asia), ("Pakistan", Asia), ("Palestine", Asia),
    ("Palestinian Territories", Asia), ("Philippines", Asia), ("Qatar", Asia),
    ("Saudi Arabia", Asia), ("Singapore", Asia), ("South Korea", Asia),
    ("Korea", Asia), ("Republic of Korea", Asia), ("S. Korea", Asia),
    ("Sri Lanka", Asia), ("Syria", Asia), ("Syrian Arab Republic", Asia),
    ("Taiwan", Asia), ("Tajikistan", Asia), ("Thailand", Asia),
    ("Timor-Leste", Asia), ("East Timor", Asia), ("Turkey", Asia),
    ("Turkmenistan", Asia), ("United Arab Emirates", Asia), ("Uzbekistan", Asia),
    ("Vietnam", Asia), ("Viet Nam", Asia), ("Yemen", Asia),

    // Europe
    ("Albania", Europe), ("Andorra", Europe), ("Austria", Europe),
    ("Belarus", Europe), ("Belgium", Europe), ("Bosnia and Herz.", Europe),
    ("Bosnia and Herzegovina", Europe), ("Bosnia", Europe), ("Bulgaria", Europe),
    ("Croatia", Europe), ("Cyprus", Europe), ("Czechia", Europe),
    ("Czech Republic", Europe), ("Czech Rep.", Europe), ("Denmark", Europe),
    ("Estonia", Europe), ("Finland", Europe), ("France", Europe),
    ("Germany", Europe), ("Greece", Europe), ("Hungary", Europe),
    ("Iceland", Europe), ("Ireland", Europe), ("Italy", Europe),
    ("Kosovo", Europe), ("Latvia", Europe), ("Liechtenstein", Europe),
    ("Lithuania", Europe), ("Luxembourg", Europe), ("Malta", Europe),
    ("Moldova", Europe), ("Republic of Moldova", Europe), ("Monaco", Europe),
    ("Montenegro", Europe), ("Netherlands", Europe), ("North Macedonia", Europe),
    ("Macedonia", Europe), ("Norway", Europe), ("Poland", Europe),
    ("Portugal", Europe), ("Romania", Europe), ("Russia", Europe),
    ("Russian Federation", Europe), ("San Marino", Europe), ("Serbia", Europe),
    ("Slovakia", Europe), ("Slovenia", Europe), ("Spain", Europe),
    ("Sweden", Europe), ("Switzerland", Europe), ("Ukraine", Europe),
    ("United Kingdom", Europe), ("UK", Europe), ("England", Europe),
    ("Vatican City", Europe), ("Vatican", Europe), ("Holy See", Europe),

    // North America
    ("Antigua and Barbuda", NorthAmerica), ("Antigua and Barb.", NorthAmerica), ("Bahamas", NorthAmerica),
    ("The Bahamas", NorthAmerica), ("Barbados", NorthAmerica), ("Belize", NorthAmerica),
    ("Canada", NorthAmerica), ("Costa Rica", NorthAmerica), ("Cuba", NorthAmerica),
    ("Dominica", NorthAmerica), ("Dominican Rep.", NorthAmerica), ("Dominican Republic", NorthAmerica),
    ("El Salvador", NorthAmerica), ("Grenada", NorthAmerica), ("Guatemala", NorthAmerica),
    ("Haiti", NorthAmerica), ("Honduras", NorthAmerica), ("Jamaica", NorthAmerica),
    ("Mexico", NorthAmerica), ("Nicaragua", NorthAmerica), ("Panama", NorthAmerica),
    ("Puerto Rico", NorthAmerica), ("Saint Kitts and Nevis", NorthAmerica), ("St. Kitts and Nevis", NorthAmerica),
    ("Saint Lucia", NorthAmerica), ("St. Lucia", NorthAmerica), ("Saint Vincent and the Grenadines", NorthAmerica),
    ("St. Vin. and Gren.", NorthAmerica), ("Trinidad and Tobago", NorthAmerica), ("Trinidad", NorthAmerica),
    ("United States", NorthAmerica), ("United States of America", NorthAmerica), ("USA", NorthAmerica),

    // South America
    ("Argentina", SouthAmerica), ("Bolivia", SouthAmerica), ("Brazil", SouthAmerica),
    ("Chile", SouthAmerica), ("Colombia", SouthAmerica), ("Ecuador", SouthAmerica),
    ("Falkland Is.", SouthAmerica), ("Falkland Islands", SouthAmerica), ("French Guiana", SouthAmerica),
    ("Fr. Guiana", SouthAmerica), ("Guyana", SouthAmerica), ("Paraguay", SouthAmerica),
    ("Peru", SouthAmerica), ("Suriname", SouthAmerica), ("Uruguay", SouthAmerica),
    ("Venezuela", SouthAmerica),

    // Oceania
    ("Australia", Oceania), ("Fiji", Oceania), ("Kiribati", Oceania),
    ("Marshall Islands", Oceania), ("Marshall Is.", Oceania), ("Micronesia", Oceania),
    ("Federated States of Micronesia", Oceania), ("Nauru", Oceania), ("New Zealand", Oceania),
    ("Palau", Oceania), ("Papua New Guinea", Oceania), ("Samoa", Oceania),
    ("Solomon Islands", Oceania), ("Solomon Is.", Oceania), ("Tonga", Oceania),
    ("Tuvalu", Oceania), ("Vanuatu", Oceania), ("New Caledonia", Oceania),

    // Antarctica
    ("Antarctica", Antarctica),
];

/// Upper-case ISO alpha-3 codes
pub(crate) const ISO_A3_CODES: &[(&str, Continent)] = &[
    // Africa
    ("DZA", Africa), ("AGO", Africa), ("BEN", Africa), ("BWA", Africa), ("BFA", Africa),
    ("BDI", Africa), ("CMR", Africa), ("CPV", Africa), ("CAF", Africa), ("TCD", Africa),
    ("COM", Africa), ("COG", Africa), ("COD", Africa), ("CIV", Africa), ("DJI", Africa),
    ("EGY", Africa), ("GNQ", Africa), ("ERI", Africa), ("ETH", Africa), ("GAB", Africa),
    ("GMB", Africa), ("GHA", Africa), ("GIN", Africa), ("GNB", Africa), ("KEN", Africa),
    ("LSO", Africa), ("LBR", Africa), ("LBY", Africa), ("MDG", Africa), ("MWI", Africa),
    ("MLI", Africa), ("MRT", Africa), ("MUS", Africa), ("MAR", Africa), ("MOZ", Africa),
    ("NAM", Africa), ("NER", Africa), ("NGA", Africa), ("RWA", Africa), ("STP", Africa),
    ("SEN", Africa), ("SYC", Africa), ("SLE", Africa), ("SOM", Africa), ("ZAF", Africa),
    ("SSD", Africa), ("SDN", Africa), ("SWZ", Africa), ("TZA", Africa), ("TGO", Africa),
    ("TUN", Africa), ("UGA", Africa), ("ZMB", Africa), ("ZWE", Africa),

    // Asia
    ("AFG", Asia), ("ARM", Asia), ("AZE", Asia), ("BHR", Asia), ("BGD", Asia),
    ("BTN", Asia), ("BRN", Asia), ("KHM", Asia), ("CHN", Asia), ("GEO", Asia),
    ("IND", Asia), ("IDN", Asia), ("IRN", Asia), ("IRQ", Asia), ("ISR", Asia),
    ("JPN", Asia), ("JOR", Asia), ("KAZ", Asia), ("KWT", Asia), ("KGZ", Asia),
    ("LAO", Asia), ("LBN", Asia), ("MYS", Asia), ("MDV", Asia), ("MNG", Asia),
    ("MMR", Asia), ("NPL", Asia), ("PRK", Asia), ("OMN", Asia), ("PAK", Asia),
    ("PSE", Asia), ("PHL", Asia), ("QAT", Asia), ("SAU", Asia), ("SGP", Asia),
    ("KOR", Asia), ("LKA", Asia), ("SYR", Asia), ("TWN", Asia), ("TJK", Asia),
    ("THA", Asia), ("TLS", Asia), ("TUR", Asia), ("TKM", Asia), ("ARE", Asia),
    ("UZB", Asia), ("VNM", Asia), ("YEM", Asia),

    // Europe
    ("ALB", Europe), ("AND", Europe), ("AUT", Europe), ("BLR", Europe), ("BEL", Europe),
    ("BIH", Europe), ("BGR", Europe), ("HRV", Europe), ("CYP", Europe), ("CZE", Europe),
    ("DNK", Europe), ("EST", Europe), ("FIN", Europe), ("FRA", Europe), ("DEU", Europe),
    ("GRC", Europe), ("HUN", Europe), ("ISL", Europe), ("IRL", Europe), ("ITA", Europe),
    ("XKX", Europe), ("LVA", Europe), ("LIE", Europe), ("LTU", Europe), ("LUX", Europe),
    ("MKD", Europe), ("MLT", Europe), ("MDA", Europe), ("MCO", Europe), ("MNE", Europe),
    ("NLD", Europe), ("NOR", Europe), ("POL", Europe), ("PRT", Europe), ("ROU", Europe),
    ("RUS", Europe), ("SMR", Europe), ("SRB", Europe), ("SVK", Europe), ("SVN", Europe),
    ("ESP", Europe), ("SWE", Europe), ("CHE", Europe), ("UKR", Europe), ("GBR", Europe),
    ("VAT", Europe),

    // North America
    ("ATG", NorthAmerica), ("BHS", NorthAmerica), ("BRB", NorthAmerica), ("BLZ", NorthAmerica), ("CAN", NorthAmerica),
    ("CRI", NorthAmerica), ("CUB", NorthAmerica), ("DMA", NorthAmerica), ("DOM", NorthAmerica), ("SLV", NorthAmerica),
    ("GRD", NorthAmerica), ("GTM", NorthAmerica), ("HTI", NorthAmerica), ("HND", NorthAmerica), ("JAM", NorthAmerica),
    ("MEX", NorthAmerica), ("NIC", NorthAmerica), ("PAN", NorthAmerica), ("KNA", NorthAmerica), ("LCA", NorthAmerica),
    ("VCT", NorthAmerica), ("TTO", NorthAmerica), ("USA", NorthAmerica),

    // South America
    ("ARG", SouthAmerica), ("BOL", SouthAmerica), ("BRA", SouthAmerica), ("CHL", SouthAmerica), ("COL", SouthAmerica),
    ("ECU", SouthAmerica), ("GUY", SouthAmerica), ("PRY", SouthAmerica), ("PER", SouthAmerica), ("SUR", SouthAmerica),
    ("URY", SouthAmerica), ("VEN", SouthAmerica),

    // Oceania
    ("AUS", Oceania), ("FJI", Oceania), ("KIR", Oceania), ("MHL", Oceania), ("FSM", Oceania),
    ("NRU", Oceania), ("NZL", Oceania), ("PLW", Oceania), ("PNG", Oceania), ("WSM", Oceania),
    ("SLB", Oceania), ("TON", Oceania), ("TUV", Oceania), ("VUT", Oceania),

    // Antarctica
    ("ATA", Antarctica),
];
