use phf::{phf_map, Map};

pub(crate) static EUC_TW: Map<u16, u16> = phf_map! {
    0x2300u16 => 599, 0x2303u16 => 382, 0x2305u16 => 413, 0x2306u16 => 596, 0x2307u16 => 529,
    0x2308u16 => 595, 0x230au16 => 452, 0x230bu16 => 318, 0x2311u16 => 545, 0x2313u16 => 508,
    0x2314u16 => 532, 0x2315u16 => 566, 0x2317u16 => 582, 0x231du16 => 575, 0x2324u16 => 256,
    0x2326u16 => 380, 0x2327u16 => 298, 0x232au16 => 587, 0x232cu16 => 574, 0x2330u16 => 531,
    0x2333u16 => 428, 0x2336u16 => 353, 0x2337u16 => 500, 0x233au16 => 407, 0x233eu16 => 313,
    0x2341u16 => 597, 0x2342u16 => 583, 0x2345u16 => 588, 0x234bu16 => 459, 0x234eu16 => 362,
    0x2353u16 => 302, 0x2356u16 => 304, 0x2359u16 => 360, 0x235bu16 => 502, 0x2400u16 => 513,
    0x2401u16 => 345, 0x240eu16 => 444, 0x2411u16 => 542, 0x2413u16 => 224, 0x2416u16 => 430,
    0x241eu16 => 170, 0x241fu16 => 511, 0x2422u16 => 422, 0x2424u16 => 242, 0x2425u16 => 450,
    0x2428u16 => 538, 0x2429u16 => 534, 0x2432u16 => 210, 0x2435u16 => 180, 0x2439u16 => 193,
    0x243du16 => 201, 0x243fu16 => 498, 0x2441u16 => 283, 0x2443u16 => 504, 0x2447u16 => 585,
    0x244bu16 => 591, 0x244du16 => 469, 0x2457u16 => 571, 0x245cu16 => 181, 0x2500u16 => 388,
    0x2503u16 => 250, 0x2509u16 => 549, 0x250au16 => 564, 0x2514u16 => 284, 0x2516u16 => 505,
    0x2517u16 => 240, 0x252au16 => 232, 0x252bu16 => 271, 0x2531u16 => 405, 0x2533u16 => 344,
    0x253au16 => 495, 0x254cu16 => 561, 0x254du16 => 544, 0x2554u16 => 343, 0x2557u16 => 330,
    0x255au16 => 293, 0x255bu16 => 325, 0x2600u16 => 470, 0x2607u16 => 365, 0x2614u16 => 441,
    0x2615u16 => 401, 0x261bu16 => 393, 0x2620u16 => 359, 0x2621u16 => 351, 0x2623u16 => 246,
    0x2630u16 => 527, 0x2635u16 => 484, 0x2637u16 => 315, 0x263eu16 => 403, 0x2641u16 => 576,
    0x2642u16 => 593, 0x2648u16 => 535, 0x264eu16 => 520, 0x264fu16 => 486, 0x2650u16 => 541,
    0x2653u16 => 212, 0x2657u16 => 338, 0x2700u16 => 562, 0x2701u16 => 446, 0x2708u16 => 537,
    0x270cu16 => 357, 0x2713u16 => 592, 0x2718u16 => 448, 0x2719u16 => 512, 0x271fu16 => 204,
    0x272au16 => 386, 0x272cu16 => 307, 0x2731u16 => 438, 0x2733u16 => 570, 0x273bu16 => 560,
    0x273cu16 => 329, 0x2742u16 => 394, 0x2746u16 => 548, 0x2748u16 => 408, 0x274cu16 => 453,
    0x274du16 => 179, 0x2753u16 => 230, 0x275du16 => 481, 0x2801u16 => 539, 0x2802u16 => 563,
    0x2804u16 => 275, 0x280bu16 => 231, 0x2810u16 => 423, 0x281au16 => 391, 0x2858u16 => 320,
    0x285cu16 => 175, 0x2914u16 => 375, 0x2917u16 => 208, 0x291bu16 => 594, 0x291fu16 => 252,
    0x2930u16 => 355, 0x2934u16 => 348, 0x2942u16 => 296, 0x2943u16 => 471, 0x2944u16 => 439,
    0x294du16 => 409, 0x2953u16 => 503, 0x2a15u16 => 282, 0x2a1eu16 => 188, 0x2a23u16 => 506,
    0x2a24u16 => 421, 0x2a2bu16 => 327, 0x2a2du16 => 494, 0x2a2eu16 => 336, 0x2a3au16 => 558,
    0x2a43u16 => 466, 0x2a46u16 => 553, 0x2a47u16 => 479, 0x2a4au16 => 186, 0x2a4fu16 => 497,
    0x2a52u16 => 335, 0x2a53u16 => 586, 0x2b02u16 => 268, 0x2b04u16 => 493, 0x2b05u16 => 332,
    0x2b06u16 => 552, 0x2b0eu16 => 580, 0x2b1cu16 => 400, 0x2b1eu16 => 364, 0x2b2eu16 => 577,
    0x2b46u16 => 254, 0x2b4du16 => 192, 0x2b58u16 => 507, 0x2c13u16 => 226, 0x2c1au16 => 235,
    0x2c33u16 => 550, 0x2c35u16 => 287, 0x2c52u16 => 410, 0x2c54u16 => 568, 0x2c57u16 => 197,
    0x2d08u16 => 379, 0x2d09u16 => 458, 0x2d0eu16 => 286, 0x2d2du16 => 524, 0x2d31u16 => 369,
    0x2d32u16 => 303, 0x2d38u16 => 389, 0x2d47u16 => 372, 0x2d4cu16 => 189, 0x2d5au16 => 600,
    0x2d5du16 => 464, 0x2e00u16 => 499, 0x2e07u16 => 305, 0x2e0eu16 => 536, 0x2e23u16 => 340,
    0x2e33u16 => 258, 0x2e39u16 => 374, 0x2e3au16 => 440, 0x2e3bu16 => 392, 0x2e44u16 => 248,
    0x2e45u16 => 264, 0x2e49u16 => 310, 0x2e4cu16 => 237, 0x2e50u16 => 390, 0x2f08u16 => 510,
    0x2f0bu16 => 402, 0x2f11u16 => 396, 0x2f12u16 => 191, 0x2f21u16 => 447, 0x2f2du16 => 203,
    0x2f5du16 => 488, 0x3002u16 => 285, 0x3004u16 => 557, 0x3007u16 => 368, 0x3019u16 => 200,
    0x301cu16 => 274, 0x301fu16 => 415, 0x3031u16 => 598, 0x303bu16 => 489, 0x3046u16 => 205,
    0x3053u16 => 290, 0x305bu16 => 433, 0x3103u16 => 476, 0x3105u16 => 195, 0x3112u16 => 589,
    0x312bu16 => 288, 0x313bu16 => 247, 0x313fu16 => 519, 0x3145u16 => 289, 0x314eu16 => 312,
    0x3157u16 => 172, 0x315bu16 => 243, 0x3200u16 => 352, 0x3231u16 => 569, 0x3233u16 => 424,
    0x323bu16 => 530, 0x3252u16 => 509, 0x3253u16 => 454, 0x3256u16 => 273, 0x3258u16 => 346,
    0x330bu16 => 221, 0x330fu16 => 581, 0x3316u16 => 584, 0x3317u16 => 211, 0x333eu16 => 455,
    0x3405u16 => 546, 0x3409u16 => 269, 0x340du16 => 460, 0x3446u16 => 207, 0x3448u16 => 457,
    0x344bu16 => 573, 0x3453u16 => 272, 0x345cu16 => 419, 0x350au16 => 199, 0x351cu16 => 228,
    0x3520u16 => 381, 0x3536u16 => 442, 0x3558u16 => 334, 0x3623u16 => 253, 0x3628u16 => 431,
    0x3643u16 => 556, 0x364eu16 => 241, 0x3713u16 => 292, 0x3723u16 => 522, 0x3740u16 => 206,
    0x3745u16 => 229, 0x374au16 => 473, 0x374cu16 => 491, 0x374du16 => 321, 0x3757u16 => 406,
    0x380cu16 => 333, 0x3813u16 => 412, 0x3815u16 => 173, 0x3817u16 => 265, 0x3821u16 => 474,
    0x382eu16 => 578, 0x3836u16 => 436, 0x3850u16 => 190, 0x3851u16 => 515, 0x3905u16 => 451,
    0x3906u16 => 339, 0x390eu16 => 311, 0x390fu16 => 411, 0x3914u16 => 565, 0x3916u16 => 501,
    0x3938u16 => 426, 0x3947u16 => 350, 0x3953u16 => 342, 0x395du16 => 218, 0x3a31u16 => 354,
    0x3a44u16 => 260, 0x3a5au16 => 219, 0x3b01u16 => 480, 0x3b17u16 => 475, 0x3b18u16 => 202,
    0x3b32u16 => 427, 0x3b37u16 => 171, 0x3b39u16 => 472, 0x3b43u16 => 245, 0x3c07u16 => 398,
    0x3c13u16 => 367, 0x3c16u16 => 487, 0x3c1cu16 => 385, 0x3c21u16 => 297, 0x3c22u16 => 445,
    0x3c34u16 => 590, 0x3c36u16 => 467, 0x3c38u16 => 262, 0x3c39u16 => 341, 0x3c3eu16 => 387,
    0x3c46u16 => 533, 0x3d0bu16 => 251, 0x3d11u16 => 482, 0x3d17u16 => 238, 0x3d2bu16 => 347,
    0x3d3au16 => 337, 0x3d3du16 => 322, 0x3d52u16 => 567, 0x3d5cu16 => 414, 0x3e05u16 => 270,
    0x3e27u16 => 465, 0x3e45u16 => 420, 0x3f31u16 => 528, 0x3f32u16 => 540, 0x3f54u16 => 543,
    0x4002u16 => 461, 0x401eu16 => 395, 0x403du16 => 316, 0x4040u16 => 554, 0x410eu16 => 456,
    0x411cu16 => 280, 0x412du16 => 255, 0x412fu16 => 517, 0x4148u16 => 397, 0x4149u16 => 370,
    0x4154u16 => 301, 0x415bu16 => 267, 0x420du16 => 299, 0x4230u16 => 182, 0x4253u16 => 477,
    0x4255u16 => 239, 0x4256u16 => 468, 0x431au16 => 492, 0x4323u16 => 559, 0x4325u16 => 483,
    0x432au16 => 366, 0x434au16 => 300, 0x434cu16 => 223, 0x4358u16 => 174, 0x4414u16 => 523,
    0x443bu16 => 331, 0x4446u16 => 309, 0x444du16 => 525, 0x4453u16 => 196, 0x4459u16 => 295,
    0x451fu16 => 220, 0x4531u16 => 278, 0x4532u16 => 551, 0x4539u16 => 168, 0x4542u16 => 308,
    0x4550u16 => 435, 0x455au16 => 432, 0x4603u16 => 425, 0x4608u16 => 416, 0x4609u16 => 417,
    0x460bu16 => 572, 0x460du16 => 328, 0x4613u16 => 547, 0x4701u16 => 216, 0x4715u16 => 236,
    0x4716u16 => 429, 0x4736u16 => 555, 0x480bu16 => 227, 0x4827u16 => 177, 0x4900u16 => 516,
    0x4901u16 => 225, 0x4906u16 => 443, 0x490au16 => 276, 0x4913u16 => 222, 0x4923u16 => 217,
    0x4937u16 => 521, 0x4a04u16 => 361, 0x4a08u16 => 579, 0x4a2bu16 => 234, 0x4a41u16 => 266,
    0x4a44u16 => 291, 0x4a49u16 => 383, 0x4a59u16 => 526, 0x4b02u16 => 166, 0x4b1fu16 => 373,
    0x4b2fu16 => 213, 0x4b30u16 => 194, 0x4b3bu16 => 294, 0x4b3cu16 => 187, 0x4b3eu16 => 277,
    0x4c13u16 => 478, 0x4c18u16 => 214, 0x4c3eu16 => 384, 0x4c5bu16 => 314, 0x4d5cu16 => 178,
    0x4e00u16 => 418, 0x4e29u16 => 184, 0x4e51u16 => 198, 0x4f21u16 => 377, 0x4f2fu16 => 518,
    0x4f31u16 => 378, 0x4f3cu16 => 404, 0x4f42u16 => 399, 0x4f4bu16 => 306, 0x5004u16 => 233,
    0x5037u16 => 326, 0x504bu16 => 176, 0x505au16 => 490, 0x5114u16 => 209, 0x5135u16 => 249,
    0x5138u16 => 215, 0x5203u16 => 437, 0x522bu16 => 376, 0x5303u16 => 371, 0x5349u16 => 449,
    0x5357u16 => 323, 0x5359u16 => 363, 0x5442u16 => 514, 0x5513u16 => 496, 0x5529u16 => 261,
    0x555cu16 => 279, 0x562au16 => 349, 0x5641u16 => 317, 0x564du16 => 463, 0x575au16 => 185,
    0x575bu16 => 356, 0x580fu16 => 434, 0x5821u16 => 485, 0x5823u16 => 259, 0x5829u16 => 319,
    0x5843u16 => 165, 0x585bu16 => 257, 0x591du16 => 324, 0x593cu16 => 462, 0x5947u16 => 183,
    0x5a16u16 => 167, 0x5a1fu16 => 244, 0x5a41u16 => 358, 0x5a4eu16 => 169, 0x5b32u16 => 263,
    0x5c07u16 => 281,
};
