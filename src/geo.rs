//! # Location Directory
//!
//! Static table of Chinese provinces and cities with the coordinates the
//! prayer-time provider is queried with. Pure data plus a couple of
//! lookup helpers — nothing here is computed, and the core never consumes
//! it beyond the (lat, lng) pair handed to the provider.
//!
//! Names keep the bilingual "Pinyin (汉字)" labels so province and city
//! pickers read naturally for both scripts.

/// A city with the coordinates used in the provider query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// A province (or municipality/region) and the cities listed under it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Province {
    pub name: &'static str,
    pub cities: &'static [City],
}

impl Province {
    /// Finds a city by its full bilingual name. Case-sensitive — names
    /// are meant to come from the directory itself or the config file.
    pub fn find_city(&self, name: &str) -> Option<&'static City> {
        self.cities.iter().find(|c| c.name == name)
    }
}

/// Finds a province by its full bilingual name, returning its index and
/// the province itself so callers can keep a cursor into [`PROVINCES`].
pub fn find_province(name: &str) -> Option<(usize, &'static Province)> {
    PROVINCES.iter().enumerate().find(|(_, p)| p.name == name)
}

pub static PROVINCES: &[Province] = &[
    Province {
        name: "Beijing (北京)",
        cities: &[
            City { name: "Beijing (北京)", lat: 39.9042, lng: 116.4074 },
        ],
    },
    Province {
        name: "Shanghai (上海)",
        cities: &[
            City { name: "Shanghai (上海)", lat: 31.2304, lng: 121.4737 },
        ],
    },
    Province {
        name: "Tianjin (天津)",
        cities: &[
            City { name: "Tianjin (天津)", lat: 39.3434, lng: 117.3616 },
        ],
    },
    Province {
        name: "Chongqing (重庆)",
        cities: &[
            City { name: "Chongqing (重庆)", lat: 29.4316, lng: 106.9123 },
        ],
    },
    Province {
        name: "Guangdong (广东)",
        cities: &[
            City { name: "Guangzhou (广州)", lat: 23.1291, lng: 113.2644 },
            City { name: "Shenzhen (深圳)", lat: 22.3193, lng: 114.1694 },
            City { name: "Dongguan (东莞)", lat: 23.0207, lng: 113.7518 },
            City { name: "Foshan (佛山)", lat: 23.0218, lng: 113.1219 },
            City { name: "Zhuhai (珠海)", lat: 22.2707, lng: 113.5767 },
            City { name: "Shantou (汕头)", lat: 23.3541, lng: 116.682 },
            City { name: "Huizhou (惠州)", lat: 23.1116, lng: 114.4162 },
            City { name: "Zhongshan (中山)", lat: 22.5176, lng: 113.3928 },
            City { name: "Jiangmen (江门)", lat: 22.5787, lng: 113.0819 },
            City { name: "Zhaoqing (肇庆)", lat: 23.0471, lng: 112.4651 },
            City { name: "Qingyuan (清远)", lat: 23.682, lng: 113.056 },
            City { name: "Shaoguan (韶关)", lat: 24.8108, lng: 113.5972 },
            City { name: "Meizhou (梅州)", lat: 24.2886, lng: 116.1222 },
            City { name: "Chaozhou (潮州)", lat: 23.6571, lng: 116.6226 },
            City { name: "Jieyang (揭阳)", lat: 23.5498, lng: 116.3728 },
            City { name: "Yunfu (云浮)", lat: 22.915, lng: 112.0444 },
            City { name: "Yangjiang (阳江)", lat: 21.8579, lng: 111.9822 },
            City { name: "Maoming (茂名)", lat: 21.663, lng: 110.9254 },
            City { name: "Zhanjiang (湛江)", lat: 21.2707, lng: 110.3594 },
        ],
    },
    Province {
        name: "Zhejiang (浙江)",
        cities: &[
            City { name: "Hangzhou (杭州)", lat: 30.2741, lng: 120.1551 },
            City { name: "Ningbo (宁波)", lat: 29.8683, lng: 121.544 },
            City { name: "Wuxi (无锡)", lat: 31.49, lng: 120.3119 },
            City { name: "Suzhou (苏州)", lat: 31.299, lng: 120.5853 },
            City { name: "Jinhua (金华)", lat: 29.0784, lng: 119.6474 },
            City { name: "Shaoxing (绍兴)", lat: 30.0297, lng: 120.5853 },
            City { name: "Taizhou (台州)", lat: 28.656, lng: 121.4206 },
            City { name: "Wenzhou (温州)", lat: 27.9938, lng: 120.699 },
        ],
    },
    Province {
        name: "Jiangsu (江苏)",
        cities: &[
            City { name: "Nanjing (南京)", lat: 32.0603, lng: 118.7969 },
            City { name: "Yangzhou (扬州)", lat: 32.3945, lng: 119.4129 },
            City { name: "Huangshan (黄山)", lat: 29.7147, lng: 118.3376 },
            City { name: "Chizhou (池州)", lat: 30.6648, lng: 117.4914 },
            City { name: "Xuancheng (宣城)", lat: 30.9454, lng: 118.7587 },
            City { name: "Lu'an (六安)", lat: 31.7337, lng: 116.5224 },
            City { name: "Bozhou (亳州)", lat: 33.8712, lng: 115.7787 },
            City { name: "Chuzhou (滁州)", lat: 32.3019, lng: 118.3218 },
            City { name: "Fuyang (阜阳)", lat: 32.8897, lng: 115.8142 },
            City { name: "Suzhou (宿州)", lat: 33.6462, lng: 116.9641 },
            City { name: "Huaibei (淮北)", lat: 33.9544, lng: 116.7983 },
            City { name: "Huainan (淮南)", lat: 32.6255, lng: 116.9998 },
            City { name: "Bengbu (蚌埠)", lat: 32.9164, lng: 117.3889 },
            City { name: "Anqing (安庆)", lat: 30.5433, lng: 117.0634 },
            City { name: "Tongling (铜陵)", lat: 30.9454, lng: 117.8121 },
            City { name: "Ma'anshan (马鞍山)", lat: 31.6702, lng: 118.5061 },
            City { name: "Wuhu (芜湖)", lat: 31.3529, lng: 118.4331 },
        ],
    },
    Province {
        name: "Hubei (湖北)",
        cities: &[
            City { name: "Wuhan (武汉)", lat: 30.5928, lng: 114.3055 },
        ],
    },
    Province {
        name: "Sichuan (四川)",
        cities: &[
            City { name: "Chengdu (成都)", lat: 30.5728, lng: 104.0668 },
        ],
    },
    Province {
        name: "Shaanxi (陕西)",
        cities: &[
            City { name: "Xi'an (西安)", lat: 34.3416, lng: 108.9398 },
        ],
    },
    Province {
        name: "Shandong (山东)",
        cities: &[
            City { name: "Qingdao (青岛)", lat: 36.0671, lng: 120.3826 },
            City { name: "Jinan (济南)", lat: 36.651, lng: 117.1201 },
        ],
    },
    Province {
        name: "Liaoning (辽宁)",
        cities: &[
            City { name: "Dalian (大连)", lat: 38.914, lng: 121.6147 },
            City { name: "Shenyang (沈阳)", lat: 41.8057, lng: 123.4315 },
        ],
    },
    Province {
        name: "Fujian (福建)",
        cities: &[
            City { name: "Xiamen (厦门)", lat: 24.4798, lng: 118.0894 },
            City { name: "Fuzhou (福州)", lat: 26.0745, lng: 119.2965 },
        ],
    },
    Province {
        name: "Yunnan (云南)",
        cities: &[
            City { name: "Kunming (昆明)", lat: 25.0389, lng: 102.7183 },
        ],
    },
    Province {
        name: "Heilongjiang (黑龙江)",
        cities: &[
            City { name: "Harbin (哈尔滨)", lat: 45.803, lng: 126.5349 },
        ],
    },
    Province {
        name: "Jilin (吉林)",
        cities: &[
            City { name: "Changchun (长春)", lat: 43.8171, lng: 125.3239 },
            City { name: "Jilin (吉林)", lat: 43.8378, lng: 126.5496 },
        ],
    },
    Province {
        name: "Henan (河南)",
        cities: &[
            City { name: "Zhengzhou (郑州)", lat: 34.7472, lng: 113.6253 },
        ],
    },
    Province {
        name: "Hebei (河北)",
        cities: &[
            City { name: "Shijiazhuang (石家庄)", lat: 38.0428, lng: 114.5149 },
            City { name: "Tangshan (唐山)", lat: 39.6309, lng: 118.1804 },
            City { name: "Qinhuangdao (秦皇岛)", lat: 39.9354, lng: 119.6005 },
            City { name: "Handan (邯郸)", lat: 36.6253, lng: 114.5391 },
            City { name: "Xingtai (邢台)", lat: 37.0682, lng: 114.5049 },
            City { name: "Baoding (保定)", lat: 38.8671, lng: 115.4823 },
            City { name: "Zhangjiakou (张家口)", lat: 40.7686, lng: 114.8841 },
            City { name: "Chengde (承德)", lat: 40.9515, lng: 117.9634 },
            City { name: "Langfang (廊坊)", lat: 39.5379, lng: 116.6838 },
            City { name: "Hengshui (衡水)", lat: 37.7351, lng: 115.6702 },
        ],
    },
    Province {
        name: "Shanxi (山西)",
        cities: &[
            City { name: "Taiyuan (太原)", lat: 37.8706, lng: 112.5489 },
            City { name: "Datong (大同)", lat: 40.0768, lng: 113.2982 },
        ],
    },
    Province {
        name: "Inner Mongolia (内蒙古)",
        cities: &[
            City { name: "Baotou (包头)", lat: 40.6571, lng: 109.8403 },
        ],
    },
    Province {
        name: "Ningxia (宁夏)",
        cities: &[
            City { name: "Yinchuan (银川)", lat: 38.4872, lng: 106.2309 },
        ],
    },
    Province {
        name: "Qinghai (青海)",
        cities: &[
            City { name: "Xining (西宁)", lat: 36.623, lng: 101.7803 },
        ],
    },
    Province {
        name: "Gansu (甘肃)",
        cities: &[
            City { name: "Lanzhou (兰州)", lat: 36.0611, lng: 103.8343 },
        ],
    },
    Province {
        name: "Xinjiang (新疆)",
        cities: &[
            City { name: "Urumqi (乌鲁木齐)", lat: 43.8256, lng: 87.6168 },
            City { name: "Kashgar (喀什)", lat: 39.4704, lng: 75.9897 },
        ],
    },
    Province {
        name: "Tibet (西藏)",
        cities: &[
            City { name: "Lhasa (拉萨)", lat: 29.65, lng: 91.1 },
        ],
    },
    Province {
        name: "Guizhou (贵州)",
        cities: &[
            City { name: "Guiyang (贵阳)", lat: 26.647, lng: 106.6302 },
        ],
    },
    Province {
        name: "Guangxi (广西)",
        cities: &[
            City { name: "Liuzhou (柳州)", lat: 24.3146, lng: 109.4283 },
            City { name: "Nanning (南宁)", lat: 22.817, lng: 108.3665 },
            City { name: "Beihai (北海)", lat: 21.4733, lng: 109.1201 },
            City { name: "Fangchenggang (防城港)", lat: 21.6861, lng: 108.3538 },
            City { name: "Qinzhou (钦州)", lat: 21.9797, lng: 108.6242 },
            City { name: "Guigang (贵港)", lat: 23.1115, lng: 109.5986 },
            City { name: "Yulin (玉林)", lat: 22.654, lng: 110.1804 },
            City { name: "Baise (百色)", lat: 23.9023, lng: 106.6186 },
            City { name: "Hezhou (贺州)", lat: 24.4037, lng: 111.5521 },
            City { name: "Hechi (河池)", lat: 24.6995, lng: 108.0621 },
            City { name: "Laibin (来宾)", lat: 23.7507, lng: 109.2298 },
            City { name: "Chongzuo (崇左)", lat: 22.4041, lng: 107.3539 },
        ],
    },
    Province {
        name: "Hainan (海南)",
        cities: &[
            City { name: "Haikou (海口)", lat: 20.044, lng: 110.192 },
            City { name: "Sanya (三亚)", lat: 18.2528, lng: 109.5119 },
        ],
    },
    Province {
        name: "Jiangxi (江西)",
        cities: &[
            City { name: "Nanchang (南昌)", lat: 28.682, lng: 115.8579 },
            City { name: "Jingdezhen (景德镇)", lat: 29.2688, lng: 117.1789 },
            City { name: "Pingxiang (萍乡)", lat: 27.6229, lng: 113.8544 },
            City { name: "Jiujiang (九江)", lat: 29.7196, lng: 116.0019 },
            City { name: "Xinyu (新余)", lat: 27.8174, lng: 114.9173 },
            City { name: "Yingtan (鹰潭)", lat: 28.2602, lng: 117.0692 },
            City { name: "Ganzhou (赣州)", lat: 25.8452, lng: 114.934 },
            City { name: "Ji'an (吉安)", lat: 27.1138, lng: 114.9927 },
            City { name: "Yichun (宜春)", lat: 27.8043, lng: 114.3917 },
            City { name: "Fuzhou (抚州)", lat: 27.9839, lng: 116.3584 },
            City { name: "Shangrao (上饶)", lat: 28.4549, lng: 117.9434 },
        ],
    },
    Province {
        name: "Hunan (湖南)",
        cities: &[
            City { name: "Changsha (长沙)", lat: 28.2278, lng: 112.9388 },
        ],
    },
    Province {
        name: "Anhui (安徽)",
        cities: &[
            City { name: "Hefei (合肥)", lat: 31.8206, lng: 117.2272 },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_province_has_at_least_one_city() {
        assert!(!PROVINCES.is_empty());
        for province in PROVINCES {
            assert!(!province.cities.is_empty(), "{} has no cities", province.name);
        }
    }

    #[test]
    fn test_coordinates_are_plausible_for_china() {
        for province in PROVINCES {
            for city in province.cities {
                assert!((18.0..=54.0).contains(&city.lat), "{} lat {}", city.name, city.lat);
                assert!((73.0..=135.0).contains(&city.lng), "{} lng {}", city.name, city.lng);
            }
        }
    }

    #[test]
    fn test_find_province_and_city() {
        let (idx, province) = find_province("Jiangsu (江苏)").unwrap();
        assert_eq!(PROVINCES[idx].name, province.name);
        let city = province.find_city("Yangzhou (扬州)").unwrap();
        assert_eq!(city.lat, 32.3945);
        assert_eq!(city.lng, 119.4129);
    }

    #[test]
    fn test_find_unknown_returns_none() {
        assert!(find_province("Atlantis").is_none());
        let (_, province) = find_province("Beijing (北京)").unwrap();
        assert!(province.find_city("Gotham").is_none());
    }

    #[test]
    fn test_province_names_are_unique() {
        let mut names: Vec<&str> = PROVINCES.iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), PROVINCES.len());
    }
}
