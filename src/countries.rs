//! Country table of the world map: lower-case ISO 3166-1 alpha-2 code,
//! display name, and an approximate centroid used to place the region.
//!
//! The names follow the map library's own spelling, which differs from the
//! World Bank's in many places ("Viet Nam", "Korea, Republic of"). Those
//! differences are what reconciliation reports as unmatched.

use crate::models::NameMapping;

pub(crate) struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub lon: f64,
    pub lat: f64,
}

const fn c(code: &'static str, name: &'static str, lon: f64, lat: f64) -> Country {
    Country { code, name, lon, lat }
}

pub(crate) static COUNTRIES: &[Country] = &[
    c("ad", "Andorra", 1.6, 42.5),
    c("ae", "United Arab Emirates", 54.3, 23.9),
    c("af", "Afghanistan", 66.0, 33.9),
    c("al", "Albania", 20.0, 41.1),
    c("am", "Armenia", 45.0, 40.1),
    c("ao", "Angola", 17.9, -12.3),
    c("aq", "Antarctica", 0.0, -80.0),
    c("ar", "Argentina", -64.0, -34.0),
    c("at", "Austria", 14.6, 47.5),
    c("au", "Australia", 134.5, -25.7),
    c("az", "Azerbaijan", 47.6, 40.1),
    c("ba", "Bosnia and Herzegovina", 17.8, 44.2),
    c("bd", "Bangladesh", 90.4, 23.7),
    c("be", "Belgium", 4.5, 50.5),
    c("bf", "Burkina Faso", -1.6, 12.2),
    c("bg", "Bulgaria", 25.5, 42.7),
    c("bh", "Bahrain", 50.6, 26.0),
    c("bi", "Burundi", 29.9, -3.4),
    c("bj", "Benin", 2.3, 9.3),
    c("bn", "Brunei Darussalam", 114.7, 4.5),
    c("bo", "Bolivia, Plurinational State of", -63.6, -16.3),
    c("br", "Brazil", -51.9, -14.2),
    c("bt", "Bhutan", 90.4, 27.5),
    c("bw", "Botswana", 24.7, -22.3),
    c("by", "Belarus", 28.0, 53.7),
    c("bz", "Belize", -88.5, 17.2),
    c("ca", "Canada", -106.3, 56.1),
    c("cd", "Congo, the Democratic Republic of the", 21.8, -4.0),
    c("cf", "Central African Republic", 20.9, 6.6),
    c("cg", "Congo", 15.8, -0.2),
    c("ch", "Switzerland", 8.2, 46.8),
    c("ci", "Cote d'Ivoire", -5.5, 7.5),
    c("cl", "Chile", -71.5, -35.7),
    c("cm", "Cameroon", 12.4, 7.4),
    c("cn", "China", 104.2, 35.9),
    c("co", "Colombia", -74.3, 4.6),
    c("cr", "Costa Rica", -84.0, 9.7),
    c("cu", "Cuba", -77.8, 21.5),
    c("cv", "Cape Verde", -24.0, 16.0),
    c("cy", "Cyprus", 33.4, 35.1),
    c("cz", "Czech Republic", 15.5, 49.8),
    c("de", "Germany", 10.5, 51.2),
    c("dj", "Djibouti", 42.6, 11.8),
    c("dk", "Denmark", 9.5, 56.3),
    c("do", "Dominican Republic", -70.2, 18.7),
    c("dz", "Algeria", 1.7, 28.0),
    c("ec", "Ecuador", -78.2, -1.8),
    c("ee", "Estonia", 25.0, 58.6),
    c("eg", "Egypt", 30.8, 26.8),
    c("eh", "Western Sahara", -12.9, 24.2),
    c("er", "Eritrea", 39.8, 15.2),
    c("es", "Spain", -3.7, 40.5),
    c("et", "Ethiopia", 40.5, 9.1),
    c("fi", "Finland", 25.7, 61.9),
    c("fr", "France", 2.2, 46.2),
    c("ga", "Gabon", 11.6, -0.8),
    c("gb", "United Kingdom", -3.4, 55.4),
    c("ge", "Georgia", 43.4, 42.3),
    c("gf", "French Guiana", -53.1, 3.9),
    c("gh", "Ghana", -1.0, 7.9),
    c("gl", "Greenland", -42.6, 71.7),
    c("gm", "Gambia", -15.3, 13.4),
    c("gn", "Guinea", -9.7, 9.9),
    c("gq", "Equatorial Guinea", 10.3, 1.7),
    c("gr", "Greece", 21.8, 39.1),
    c("gt", "Guatemala", -90.2, 15.8),
    c("gu", "Guam", 144.8, 13.4),
    c("gw", "Guinea-Bissau", -15.2, 11.8),
    c("gy", "Guyana", -58.9, 4.9),
    c("hk", "Hong Kong", 114.1, 22.4),
    c("hn", "Honduras", -86.2, 15.2),
    c("hr", "Croatia", 15.2, 45.1),
    c("ht", "Haiti", -72.3, 19.0),
    c("hu", "Hungary", 19.5, 47.2),
    c("id", "Indonesia", 113.9, -0.8),
    c("ie", "Ireland", -8.2, 53.4),
    c("il", "Israel", 34.9, 31.0),
    c("in", "India", 78.9, 20.6),
    c("iq", "Iraq", 43.7, 33.2),
    c("ir", "Iran, Islamic Republic of", 53.7, 32.4),
    c("is", "Iceland", -19.0, 64.9),
    c("it", "Italy", 12.6, 41.9),
    c("jm", "Jamaica", -77.3, 18.1),
    c("jo", "Jordan", 36.2, 30.6),
    c("jp", "Japan", 138.3, 36.2),
    c("ke", "Kenya", 37.9, -0.0),
    c("kg", "Kyrgyzstan", 74.8, 41.2),
    c("kh", "Cambodia", 104.9, 12.6),
    c("kp", "Korea, Democratic People's Republic of", 127.5, 40.3),
    c("kr", "Korea, Republic of", 127.8, 35.9),
    c("kw", "Kuwait", 47.5, 29.3),
    c("kz", "Kazakhstan", 66.9, 48.0),
    c("la", "Lao People's Democratic Republic", 102.5, 19.9),
    c("lb", "Lebanon", 35.9, 33.9),
    c("li", "Liechtenstein", 9.6, 47.2),
    c("lk", "Sri Lanka", 80.8, 7.9),
    c("lr", "Liberia", -9.4, 6.4),
    c("ls", "Lesotho", 28.2, -29.6),
    c("lt", "Lithuania", 23.9, 55.2),
    c("lu", "Luxembourg", 6.1, 49.8),
    c("lv", "Latvia", 24.6, 56.9),
    c("ly", "Libyan Arab Jamahiriya", 17.2, 26.3),
    c("ma", "Morocco", -7.1, 31.8),
    c("mc", "Monaco", 7.4, 43.7),
    c("md", "Moldova, Republic of", 28.4, 47.4),
    c("me", "Montenegro", 19.4, 42.7),
    c("mg", "Madagascar", 46.9, -18.8),
    c("mk", "Macedonia, the former Yugoslav Republic of", 21.7, 41.6),
    c("ml", "Mali", -4.0, 17.6),
    c("mm", "Myanmar", 96.0, 21.9),
    c("mn", "Mongolia", 103.8, 46.9),
    c("mo", "Macao", 113.5, 22.2),
    c("mr", "Mauritania", -10.9, 21.0),
    c("mt", "Malta", 14.4, 35.9),
    c("mu", "Mauritius", 57.6, -20.3),
    c("mv", "Maldives", 73.2, 3.2),
    c("mw", "Malawi", 34.3, -13.3),
    c("mx", "Mexico", -102.6, 23.6),
    c("my", "Malaysia", 101.9, 4.2),
    c("mz", "Mozambique", 35.5, -18.7),
    c("na", "Namibia", 18.5, -22.9),
    c("ne", "Niger", 8.1, 17.6),
    c("ng", "Nigeria", 8.7, 9.1),
    c("ni", "Nicaragua", -85.2, 12.9),
    c("nl", "Netherlands", 5.3, 52.1),
    c("no", "Norway", 8.5, 60.5),
    c("np", "Nepal", 84.1, 28.4),
    c("nz", "New Zealand", 174.9, -40.9),
    c("om", "Oman", 55.9, 21.5),
    c("pa", "Panama", -80.8, 8.5),
    c("pe", "Peru", -75.0, -9.2),
    c("pg", "Papua New Guinea", 143.9, -6.3),
    c("ph", "Philippines", 121.8, 12.9),
    c("pk", "Pakistan", 69.3, 30.4),
    c("pl", "Poland", 19.1, 51.9),
    c("pr", "Puerto Rico", -66.6, 18.2),
    c("ps", "Palestine, State of", 35.2, 31.9),
    c("pt", "Portugal", -8.2, 39.4),
    c("py", "Paraguay", -58.4, -23.4),
    c("re", "Reunion", 55.5, -21.1),
    c("ro", "Romania", 25.0, 45.9),
    c("rs", "Serbia", 21.0, 44.0),
    c("ru", "Russian Federation", 105.3, 61.5),
    c("rw", "Rwanda", 29.9, -1.9),
    c("sa", "Saudi Arabia", 45.1, 23.9),
    c("sc", "Seychelles", 55.5, -4.7),
    c("sd", "Sudan", 30.2, 12.9),
    c("se", "Sweden", 18.6, 60.1),
    c("sg", "Singapore", 103.8, 1.4),
    c("sh", "Saint Helena, Ascension and Tristan da Cunha", -5.7, -15.9),
    c("si", "Slovenia", 15.0, 46.2),
    c("sk", "Slovakia", 19.7, 48.7),
    c("sl", "Sierra Leone", -11.8, 8.5),
    c("sm", "San Marino", 12.5, 43.9),
    c("sn", "Senegal", -14.5, 14.5),
    c("so", "Somalia", 46.2, 5.2),
    c("sr", "Suriname", -56.0, 3.9),
    c("st", "Sao Tome and Principe", 6.6, 0.2),
    c("sv", "El Salvador", -88.9, 13.8),
    c("sy", "Syrian Arab Republic", 38.9, 34.8),
    c("sz", "Swaziland", 31.5, -26.5),
    c("td", "Chad", 18.7, 15.5),
    c("tg", "Togo", 0.8, 8.6),
    c("th", "Thailand", 101.0, 15.9),
    c("tj", "Tajikistan", 71.3, 38.9),
    c("tl", "Timor-Leste", 125.7, -8.9),
    c("tm", "Turkmenistan", 59.6, 39.0),
    c("tn", "Tunisia", 9.5, 33.9),
    c("tr", "Turkey", 35.2, 39.0),
    c("tw", "Taiwan, Province of China", 121.0, 23.7),
    c("tz", "Tanzania, United Republic of", 34.9, -6.4),
    c("ua", "Ukraine", 31.2, 48.4),
    c("ug", "Uganda", 32.3, 1.4),
    c("us", "United States", -95.7, 37.1),
    c("uy", "Uruguay", -55.8, -32.5),
    c("uz", "Uzbekistan", 64.6, 41.4),
    c("va", "Holy See (Vatican City State)", 12.5, 41.9),
    c("ve", "Venezuela, Bolivarian Republic of", -66.6, 6.4),
    c("vn", "Viet Nam", 108.3, 14.1),
    c("ye", "Yemen", 48.5, 15.6),
    c("yt", "Mayotte", 45.2, -12.8),
    c("za", "South Africa", 22.9, -30.6),
    c("zm", "Zambia", 27.8, -13.1),
    c("zw", "Zimbabwe", 29.2, -19.0),
];

/// Code to name for every country on the world map.
pub fn plot_countries() -> NameMapping {
    COUNTRIES
        .iter()
        .map(|country| (country.code.to_string(), country.name.to_string()))
        .collect()
}

/// Approximate (lon, lat) of the country with `code`.
pub fn centroid(code: &str) -> Option<(f64, f64)> {
    COUNTRIES
        .iter()
        .find(|country| country.code == code)
        .map(|country| (country.lon, country.lat))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_unique_and_sorted() {
        let codes: Vec<&str> = COUNTRIES.iter().map(|c| c.code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
        assert_eq!(plot_countries().len(), COUNTRIES.len());
    }

    #[test]
    fn test_centroids_in_range() {
        for country in COUNTRIES {
            assert!((-180.0..=180.0).contains(&country.lon), "{}", country.code);
            assert!((-90.0..=90.0).contains(&country.lat), "{}", country.code);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(plot_countries()["cn"], "China");
        assert_eq!(centroid("gb"), Some((-3.4, 55.4)));
        assert_eq!(centroid("zz"), None);
    }
}
